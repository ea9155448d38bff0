use crate::error::{Result, TallyError};
use crate::model::Ledger;
use chrono::{Local, SecondsFormat};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const LEDGER_FILE: &str = "ledger.json";
const LOG_FILE: &str = "activity.log";

/// Filesystem store for the tracker directory. Every operation is a fresh
/// full read or full rewrite; there is no in-process caching and no locking,
/// so concurrent records race last-writer-wins.
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn open(dir: Option<&Path>) -> Result<Self> {
        let root = match dir {
            Some(path) => path.to_path_buf(),
            None => dirs::home_dir()
                .ok_or_else(|| TallyError::Store("could not determine home directory".to_string()))?
                .join(".tally"),
        };
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.root.join(LEDGER_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join(LOG_FILE)
    }

    pub fn hooks_dir(&self) -> PathBuf {
        self.root.join("hooks")
    }

    /// Loads the ledger. A missing file loads as an empty ledger; so does
    /// unparsable content — that is a deliberate policy (it masks corruption,
    /// but a damaged ledger must never break the post-commit hook).
    pub fn load_ledger(&self) -> Ledger {
        match fs::read_to_string(self.ledger_path()) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => Ledger::default(),
        }
    }

    /// Rewrites the whole ledger file, pretty-printed.
    pub fn save_ledger(&self, ledger: &Ledger) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let mut out = serde_json::to_string_pretty(ledger)?;
        out.push('\n');
        fs::write(self.ledger_path(), out)?;
        Ok(())
    }

    /// Appends one timestamped line to the activity log.
    pub fn append_log(&self, message: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_path())?;
        let ts = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        writeln!(file, "{ts}: {message}")?;
        Ok(())
    }

    /// All non-blank log lines in file order, or `None` if the file does not
    /// exist. Never creates the file.
    pub fn log_lines(&self) -> Result<Option<Vec<String>>> {
        let path = self.log_path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(Some(
            raw.lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        ))
    }

    /// Creates the tracker directory and empty ledger/log files if absent.
    pub fn provision(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        if !self.ledger_path().exists() {
            self.save_ledger(&Ledger::default())?;
        }
        if !self.log_path().exists() {
            fs::write(self.log_path(), "")?;
        }
        Ok(())
    }

    /// Overwrites the ledger with an empty mapping and truncates the log.
    pub fn reset(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        self.save_ledger(&Ledger::default())?;
        fs::write(self.log_path(), "")?;
        Ok(())
    }
}
