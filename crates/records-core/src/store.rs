//! Shared in-memory record collection.

use std::sync::{Mutex, MutexGuard};

use records_model::{Person, RecordsError, Result, SortStyle};
use tracing::debug;

/// Insertion-ordered person records shared between request handlers.
///
/// Every operation takes the lock once. Sorted reads work on a copy, so the
/// stored order never changes after an append.
#[derive(Debug, Default)]
pub struct RecordStore {
    persons: Mutex<Vec<Person>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(persons: Vec<Person>) -> Self {
        Self {
            persons: Mutex::new(persons),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Person>>> {
        self.persons.lock().map_err(|_| RecordsError::StorePoisoned)
    }

    pub fn append(&self, person: Person) -> Result<()> {
        let mut persons = self.lock()?;
        persons.push(person);
        debug!(records = persons.len(), "record appended");
        Ok(())
    }

    /// Appends a batch without interleaving with other writers.
    pub fn append_all(&self, batch: impl IntoIterator<Item = Person>) -> Result<()> {
        let mut persons = self.lock()?;
        let before = persons.len();
        persons.extend(batch);
        debug!(added = persons.len() - before, records = persons.len(), "records appended");
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Copy of the records in insertion order.
    pub fn snapshot(&self) -> Result<Vec<Person>> {
        Ok(self.lock()?.clone())
    }

    /// Copy of the records ordered by `style`. Sorting happens after the
    /// lock is released.
    pub fn snapshot_sorted(&self, style: SortStyle) -> Result<Vec<Person>> {
        let mut persons = self.snapshot()?;
        style.sort(&mut persons);
        Ok(persons)
    }
}
