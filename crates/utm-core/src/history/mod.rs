//! Generated-link history.
//!
//! History is an append-only list of records, unique by `link`, that is only
//! ever emptied as a whole. Every operation on a [`HistoryStore`] is a single
//! read-modify-write of the full list.

mod file;
mod memory;
mod record;

pub use file::JsonFileHistory;
pub use memory::MemoryHistory;
pub use record::{format_creation_date, HistoryRecord};

use anyhow::Result;

/// Repository for history records.
pub trait HistoryStore {
    /// All records, oldest first. A store that was never written is empty.
    fn load(&self) -> Result<Vec<HistoryRecord>>;

    /// Appends `record` unless a record with the same link exists.
    ///
    /// Returns `true` if the record was stored.
    fn append(&self, record: HistoryRecord) -> Result<bool>;

    /// Removes every record.
    fn clear(&self) -> Result<()>;
}

/// Pushes `record` onto `records` unless its link is already present.
pub(crate) fn push_unique(records: &mut Vec<HistoryRecord>, record: HistoryRecord) -> bool {
    if records.iter().any(|r| r.link == record.link) {
        return false;
    }
    records.push(record);
    true
}
