//! User-facing notifications as structured outcomes.
//!
//! Front ends decide how a [`Notice`] is shown; the core never formats UI.

use std::path::PathBuf;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A generation request finished; `composed` of `total` links succeeded.
    Generated { composed: usize, total: usize },
    /// A generation request was rejected before composing anything.
    Rejected(ValidationError),
    Exported { path: PathBuf, rows: usize },
    NothingToExport,
    HistoryCleared,
}

pub trait Notifier {
    fn notify(&self, notice: &Notice);
}
