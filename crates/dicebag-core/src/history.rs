//! History storage port and an in-memory implementation.
//!
//! The engine never touches persistence directly. Services append rolls,
//! selections, and results through [`HistoryStore`], and hosts choose the
//! backing implementation. [`MemoryStore`] keeps records in insertion order.

use crate::error::{DiceError, DiceResult};

/// A record that can be looked up by id.
pub trait Record {
    /// The record's unique identifier.
    fn record_id(&self) -> &str;
}

/// An ordered append log of records of one kind.
pub trait HistoryStore<T: Record + Clone> {
    /// Append a record at the end of the log.
    fn append(&mut self, record: T);

    /// Replace the record with the same id, or append if none exists.
    /// The stored record moves to the end of the log.
    fn upsert(&mut self, record: T);

    /// All records in insertion order.
    fn list_all(&self) -> Vec<T>;

    /// The last `n` records, in insertion order.
    fn list_recent(&self, n: usize) -> Vec<T>;

    /// Remove every record.
    fn clear(&mut self);

    /// Look up a record by id.
    fn find_by_id(&self, id: &str) -> Option<T>;

    /// Remove the record with the given id.
    ///
    /// # Errors
    ///
    /// [`DiceError::NotFound`] if no record has that id.
    fn remove(&mut self, id: &str) -> DiceResult<()>;

    /// Number of stored records.
    fn len(&self) -> usize {
        self.list_all().len()
    }

    /// Whether the log is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A `Vec`-backed [`HistoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: Vec<T>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> MemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the stored records without cloning.
    pub fn records(&self) -> &[T] {
        &self.records
    }
}

impl<T: Record> FromIterator<T> for MemoryStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<T: Record + Clone> HistoryStore<T> for MemoryStore<T> {
    fn append(&mut self, record: T) {
        self.records.push(record);
    }

    fn upsert(&mut self, record: T) {
        self.records.retain(|r| r.record_id() != record.record_id());
        self.records.push(record);
    }

    fn list_all(&self) -> Vec<T> {
        self.records.clone()
    }

    fn list_recent(&self, n: usize) -> Vec<T> {
        let start = self.records.len().saturating_sub(n);
        self.records[start..].to_vec()
    }

    fn clear(&mut self) {
        self.records.clear();
    }

    fn find_by_id(&self, id: &str) -> Option<T> {
        self.records.iter().find(|r| r.record_id() == id).cloned()
    }

    fn remove(&mut self, id: &str) -> DiceResult<()> {
        let before = self.records.len();
        self.records.retain(|r| r.record_id() != id);
        if self.records.len() == before {
            Err(DiceError::NotFound(format!("record {id}")))
        } else {
            Ok(())
        }
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
