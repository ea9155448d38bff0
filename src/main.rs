use clap::error::ErrorKind;
use std::process;
use tally::cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version are successes; anything else (typically an
            // unrecognized command) exits 1 after printing usage.
            let code = match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = cli.execute() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
