use crate::cli::CommonArgs;
use crate::model::{Ledger, StatsOutput, SCHEMA_VERSION};
use crate::store::Store;
use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate, Utc};
use console::style;

pub fn exec(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let store = Store::open(common.dir.as_deref()).context("Failed to open tracker directory")?;
    let ledger = store.load_ledger();

    if ledger.is_empty() {
        println!("No commit data found. Run `tally setup` to start tracking.");
        return Ok(());
    }

    let stats = compute_stats(&ledger, Local::now().date_naive());
    if json {
        output_json(&stats)?;
    } else {
        output_table(&stats);
    }
    Ok(())
}

pub fn compute_stats(ledger: &Ledger, today: NaiveDate) -> StatsOutput {
    let total = ledger.total();
    let active_days = ledger.active_days();
    // Average over weeks of activity, clamped to at least one week.
    let weeks = (active_days as f64 / 7.0).max(1.0);

    StatsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        total_commits: total,
        active_days,
        last_week: ledger.last_days(today, 7),
        top_days: ledger.top_days(5),
        weekly_average: total as f64 / weeks,
        month_total: ledger.month_total(today.year(), today.month()),
    }
}

fn output_json(stats: &StatsOutput) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

fn output_table(stats: &StatsOutput) {
    println!("{}", style("Commit Activity").bold());
    println!("{}", "─".repeat(40));
    println!("Total commits:  {}", stats.total_commits);
    println!("Active days:    {}", stats.active_days);
    println!("Weekly average: {:.1}", stats.weekly_average);
    println!("This month:     {}", stats.month_total);

    println!("\n{}", style("Last 7 days").bold());
    let max = stats.last_week.iter().map(|d| d.count).max().unwrap_or(1).max(1);
    for day in &stats.last_week {
        let intensity = ((day.count as f64 / max as f64) * 5.0) as u32;
        let bar = match intensity {
            0 => " ",
            1 => "▁",
            2 => "▃",
            3 => "▅",
            4 => "▇",
            _ => "█",
        };
        println!("{} {} {:>4}", day.date, style(bar).green(), day.count);
    }

    println!("\n{}", style("Top days").bold());
    for (rank, day) in stats.top_days.iter().enumerate() {
        println!("{}. {} {:>4}", rank + 1, day.date, day.count);
    }
}
