use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use time::OffsetDateTime;

use crate::domain::{StoredData, StoredEntry};

const APP_DIR: &str = "sshwiz";
const HISTORY_FILE: &str = "history.json";

/// Resolves the history file path under `~/.config/sshwiz`, creating the
/// directory owner-only on first use.
fn history_path(home: &Path) -> Result<PathBuf> {
    let dir = home.join(".config").join(APP_DIR);
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder
        .create(&dir)
        .with_context(|| format!("could not create config directory {}", dir.display()))?;
    Ok(dir.join(HISTORY_FILE))
}

/// Loads remembered selections. A missing file is a normal first run and
/// yields empty history.
pub fn load(home: &Path) -> Result<StoredData> {
    let path = history_path(home)?;
    if !path.exists() {
        return Ok(StoredData::default());
    }
    let text = fs::read_to_string(&path)
        .with_context(|| format!("could not read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("could not parse {}", path.display()))
}

/// Writes the history file, owner-only.
pub fn save(home: &Path, data: &StoredData) -> Result<()> {
    let path = history_path(home)?;
    let text = serde_json::to_string_pretty(data).context("could not serialize history")?;
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options
        .open(&path)
        .with_context(|| format!("could not open {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("could not write {}", path.display()))
}

/// Records a selection: refreshes the timestamp of a known value, appends an
/// unknown one.
pub fn add_or_update(entries: &mut Vec<StoredEntry>, value: &str) {
    if let Some(entry) = entries.iter_mut().find(|e| e.value == value) {
        entry.last_used = OffsetDateTime::now_utc();
    } else {
        entries.push(StoredEntry::new(value));
    }
}
