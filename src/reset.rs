use crate::cli::CommonArgs;
use crate::store::Store;
use anyhow::Context;
use std::io::{self, Write};

pub fn exec(common: CommonArgs, yes: bool) -> anyhow::Result<()> {
    let store = Store::open(common.dir.as_deref()).context("Failed to open tracker directory")?;

    if !yes && !confirm()? {
        println!("Aborted.");
        return Ok(());
    }

    store.reset().context("Failed to reset tracker files")?;
    println!("Ledger and activity log cleared.");
    Ok(())
}

fn confirm() -> anyhow::Result<bool> {
    print!("This permanently clears all recorded commit data. Type 'yes' to continue: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim() == "yes")
}
