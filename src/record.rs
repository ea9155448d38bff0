use crate::cli::CommonArgs;
use crate::store::Store;
use anyhow::Context;
use chrono::{Local, NaiveDate};

pub fn exec(common: CommonArgs) -> anyhow::Result<()> {
    let store = Store::open(common.dir.as_deref()).context("Failed to open tracker directory")?;
    let today = Local::now().date_naive();
    record(&store, today);
    println!("commit recorded for {today}");
    Ok(())
}

/// Increments the count for `date` and logs the event. Every failure is
/// written to the activity log (best effort) and swallowed: the post-commit
/// hook must never block or fail the commit that triggered it.
pub fn record(store: &Store, date: NaiveDate) {
    let mut ledger = store.load_ledger();
    ledger.record(date);
    if let Err(err) = store.save_ledger(&ledger) {
        let _ = store.append_log(&format!("ERROR: failed to write ledger: {err}"));
        return;
    }
    let _ = store.append_log(&format!("commit recorded for {date}"));
}
