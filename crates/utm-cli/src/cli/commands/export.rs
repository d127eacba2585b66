//! `utm export` – write history to `utm_<YYYYMMDD>.csv`.

use anyhow::Result;
use std::path::Path;
use utm_core::error::ExportError;
use utm_core::export::{export_date, export_to_dir};
use utm_core::history::HistoryStore;
use utm_core::notify::{Notice, Notifier};

use crate::cli::render::TerminalNotifier;

pub fn run_export(history: &dyn HistoryStore, dir: &Path) -> Result<()> {
    let records = history.load()?;
    match export_to_dir(&records, dir, export_date()) {
        Ok(path) => {
            println!("{}", path.display());
            TerminalNotifier.notify(&Notice::Exported {
                path,
                rows: records.len(),
            });
        }
        Err(ExportError::Empty) => TerminalNotifier.notify(&Notice::NothingToExport),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
