use crate::cli::CommonArgs;
use crate::error::Result;
use crate::store::Store;
use anyhow::{bail, Context};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Post-commit hook script content.
const POST_COMMIT_HOOK: &str = r#"#!/bin/sh
# tally commit tracking (auto-installed)
# Increments today's commit count; never blocks the commit

tally record >/dev/null 2>&1 || true
"#;

pub fn exec(common: CommonArgs) -> anyhow::Result<()> {
    if !git_available() {
        bail!("git not found on PATH; install git before running setup");
    }

    let store = Store::open(common.dir.as_deref()).context("Failed to open tracker directory")?;
    store
        .provision()
        .context("Failed to provision tracker files")?;

    let hooks_dir = store.hooks_dir();
    fs::create_dir_all(&hooks_dir).context("Failed to create hooks directory")?;
    let hook_path = hooks_dir.join("post-commit");
    install_hook(&hook_path, POST_COMMIT_HOOK).context("Failed to install post-commit hook")?;

    let status = Command::new("git")
        .args(["config", "--global", "core.hooksPath"])
        .arg(&hooks_dir)
        .status()
        .context("Failed to run git config")?;
    if !status.success() {
        bail!("git config --global core.hooksPath failed");
    }

    println!("Tracking commits in {}", store.root().display());
    println!("Installed post-commit hook at {}", hook_path.display());
    Ok(())
}

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Installs a single hook, preserving any existing hook content.
fn install_hook(path: &Path, content: &str) -> Result<()> {
    let final_content = if path.exists() {
        let existing = fs::read_to_string(path)?;

        // Already has our hook
        if existing.contains("tally record") {
            return make_executable(path);
        }

        format!("{}\n\n{}", existing.trim(), content)
    } else {
        content.to_string()
    };

    fs::write(path, &final_content)?;
    make_executable(path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
