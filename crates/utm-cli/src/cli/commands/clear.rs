//! `utm clear` – delete every saved link after confirmation.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use utm_core::history::HistoryStore;
use utm_core::notify::{Notice, Notifier};

use crate::cli::render::TerminalNotifier;

pub fn run_clear(history: &dyn HistoryStore, yes: bool) -> Result<()> {
    if !yes {
        let stdin = io::stdin();
        let mut stderr = io::stderr();
        if !confirm(&mut stdin.lock(), &mut stderr)? {
            println!("Cancelled.");
            return Ok(());
        }
    }
    history.clear()?;
    TerminalNotifier.notify(&Notice::HistoryCleared);
    Ok(())
}

/// Asks `Clear all history? [y/N]`; only `y`/`yes` (any case) confirms.
pub(crate) fn confirm(input: &mut impl BufRead, prompt: &mut impl Write) -> Result<bool> {
    write!(prompt, "Clear all history? This deletes everything. [y/N] ")?;
    prompt.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("read confirmation")?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use utm_core::history::{HistoryRecord, MemoryHistory};

    fn ask(answer: &str) -> bool {
        let mut out = Vec::new();
        confirm(&mut answer.as_bytes(), &mut out).unwrap()
    }

    #[test]
    fn confirm_accepts_yes_only() {
        assert!(ask("y\n"));
        assert!(ask("YES\n"));
        assert!(!ask("n\n"));
        assert!(!ask("\n"));
        assert!(!ask(""));
    }

    #[test]
    fn clear_with_yes_skips_prompt() {
        let store = MemoryHistory::with_records(vec![HistoryRecord {
            data: "01/01/2024".into(),
            link: "https://a.com".into(),
        }]);
        run_clear(&store, true).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
