use crate::cli::CommonArgs;
use crate::model::{WeeklyOutput, SCHEMA_VERSION};
use crate::store::Store;
use anyhow::Context;
use chrono::Utc;
use console::style;

pub fn exec(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let store = Store::open(common.dir.as_deref()).context("Failed to open tracker directory")?;
    let ledger = store.load_ledger();

    if ledger.is_empty() {
        println!("No commit data found. Run `tally setup` to start tracking.");
        return Ok(());
    }

    let output = WeeklyOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        total_commits: ledger.total(),
        buckets: ledger.weekday_buckets(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output_table(&output);
    }
    Ok(())
}

fn output_table(output: &WeeklyOutput) {
    println!(
        "{:<10} {:>7} {:>9}",
        style("Weekday").bold(),
        style("Total").bold(),
        style("Average").bold()
    );
    println!("{}", "─".repeat(28));
    for bucket in &output.buckets {
        println!(
            "{:<10} {:>7} {:>9.1}",
            bucket.weekday, bucket.total, bucket.average
        );
    }
    println!("\nTotal commits: {}", output.total_commits);
}
