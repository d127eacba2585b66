//! History persisted as a JSON array under the XDG data dir.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{push_unique, HistoryRecord, HistoryStore};

const HISTORY_FILE: &str = "history.json";

/// JSON-file backed history.
///
/// The file holds `[{"data": ..., "link": ...}, ...]`. A missing file is an
/// empty history. Writes go to a temp file in the same directory which then
/// replaces the old file, so readers never see a half-written list.
#[derive(Debug, Clone)]
pub struct JsonFileHistory {
    path: PathBuf,
}

impl JsonFileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default history file: `~/.local/share/utm/history.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("utm")?;
        Ok(xdg_dirs.get_data_home().join(HISTORY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<HistoryRecord>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("read history: {}", self.path.display()))
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        // A literal `null` is an empty history.
        let records: Option<Vec<HistoryRecord>> = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse history: {}", self.path.display()))?;
        Ok(records.unwrap_or_default())
    }

    fn write(&self, records: &[HistoryRecord]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;

        let json = serde_json::to_vec(records).context("serialize history")?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .with_context(|| format!("create temp file in {}", parent.display()))?;
        tmp.write_all(&json).context("write history temp file")?;
        tmp.persist(&self.path)
            .with_context(|| format!("write history: {}", self.path.display()))?;
        Ok(())
    }
}

impl HistoryStore for JsonFileHistory {
    fn load(&self) -> Result<Vec<HistoryRecord>> {
        self.read()
    }

    fn append(&self, record: HistoryRecord) -> Result<bool> {
        let mut records = self.read()?;
        let link = record.link.clone();
        if !push_unique(&mut records, record) {
            tracing::debug!(%link, "link already in history");
            return Ok(false);
        }
        self.write(&records)?;
        tracing::debug!(%link, total = records.len(), "appended to history");
        Ok(true)
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("clear history: {}", self.path.display()))
            }
        }
        tracing::info!(path = %self.path.display(), "history cleared");
        Ok(())
    }
}
