//! In-process history store.

use std::cell::RefCell;

use anyhow::Result;

use super::{push_unique, HistoryRecord, HistoryStore};

/// History kept in memory for the life of the value; nothing touches disk.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: RefCell<Vec<HistoryRecord>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<HistoryRecord>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }
}

impl HistoryStore for MemoryHistory {
    fn load(&self) -> Result<Vec<HistoryRecord>> {
        Ok(self.records.borrow().clone())
    }

    fn append(&self, record: HistoryRecord) -> Result<bool> {
        Ok(push_unique(&mut self.records.borrow_mut(), record))
    }

    fn clear(&self) -> Result<()> {
        self.records.borrow_mut().clear();
        Ok(())
    }
}
