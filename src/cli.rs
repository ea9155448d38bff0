use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Track how many commits you make per day, across every repository")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to the tracker directory (defaults to ~/.tally)")]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Provision the tracker files and install the global post-commit hook
    Setup,
    /// Show overall totals, the last 7 days, and the busiest days
    Stats {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Show totals and averages per weekday
    Weekly {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Show the tail of the activity log
    Log {
        #[arg(long, default_value_t = 20, help = "Number of trailing log lines to show")]
        lines: usize,
    },
    /// Clear all recorded data (asks for confirmation)
    Reset {
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
    /// Record one commit now, as the hook would
    Test,
    // Invoked by the installed post-commit hook.
    #[command(hide = true)]
    Record,
}

impl Cli {
    pub fn try_parse() -> std::result::Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Setup => crate::setup::exec(self.common),
            Commands::Stats { json } => crate::stats::exec(self.common, json),
            Commands::Weekly { json } => crate::weekly::exec(self.common, json),
            Commands::Log { lines } => crate::activity::exec(self.common, lines),
            Commands::Reset { yes } => crate::reset::exec(self.common, yes),
            Commands::Test | Commands::Record => crate::record::exec(self.common),
        }
    }
}
