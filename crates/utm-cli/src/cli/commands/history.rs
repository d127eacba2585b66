//! `utm history` – list saved links, newest first.

use anyhow::Result;
use std::io::Write;
use utm_core::history::HistoryStore;

use crate::cli::render::preview;

pub fn run_history(history: &dyn HistoryStore, color: bool, out: &mut impl Write) -> Result<()> {
    let records = history.load()?;
    if records.is_empty() {
        writeln!(out, "No links yet.")?;
        return Ok(());
    }
    writeln!(out, "{:<12} {}", "DATE", "LINK")?;
    for r in records.iter().rev() {
        writeln!(out, "{:<12} {}", r.data, preview(&r.link, color))?;
    }
    Ok(())
}
