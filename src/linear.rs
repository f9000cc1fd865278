//! Hash-indexed baseline store with the same external contract as the
//! BST-backed store.
//!
//! Used to validate that both stores implement the same observable
//! behavior, and as the comparison subject in the benchmarks. The one
//! documented divergence: [`LinearRecordStore::list_all`] returns records
//! in insertion order, not key order.

use crate::error::{BstError, KeyResult, ModifyResult};
use crate::types::{normalize_key, LinearRecordStore, Record};

impl LinearRecordStore {
    /// Insert a record, taking ownership of it.
    ///
    /// Same validation and error values as
    /// [`BstRecordStore::insert`](crate::BstRecordStore::insert).
    pub fn insert(&mut self, record: Record) -> ModifyResult<()> {
        if record.key.is_empty() {
            return Err(BstError::invalid_record("key cannot be empty"));
        }
        let norm = normalize_key(&record.key, self.case_sensitive);
        if self.index.contains_key(&norm) {
            return Err(BstError::duplicate_key(&record.key));
        }
        self.index.insert(norm, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Look up a record by key; a miss (or empty key) is `None`.
    pub fn find(&self, key: &str) -> Option<&Record> {
        if key.is_empty() {
            return None;
        }
        let norm = normalize_key(key, self.case_sensitive);
        self.index.get(&norm).map(|&i| &self.records[i])
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Replace the contact field of the record stored under `key`.
    pub fn update(&mut self, key: &str, new_contact: &str) -> KeyResult<()> {
        if key.is_empty() {
            return Err(BstError::KeyNotFound);
        }
        let norm = normalize_key(key, self.case_sensitive);
        match self.index.get(&norm) {
            Some(&i) => {
                self.records[i].contact = new_contact.to_string();
                Ok(())
            }
            None => Err(BstError::KeyNotFound),
        }
    }

    /// Return all records in insertion order.
    pub fn list_all(&self) -> Vec<&Record> {
        self.records.iter().collect()
    }

    /// Returns the number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
