use crate::cli::CommonArgs;
use crate::store::Store;
use anyhow::Context;

pub fn exec(common: CommonArgs, lines: usize) -> anyhow::Result<()> {
    let store = Store::open(common.dir.as_deref()).context("Failed to open tracker directory")?;
    match store.log_lines().context("Failed to read activity log")? {
        None => println!("no log file found"),
        Some(all) => {
            let start = all.len().saturating_sub(lines);
            for line in &all[start..] {
                println!("{line}");
            }
        }
    }
    Ok(())
}
