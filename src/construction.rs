//! Construction and initialization for the record stores.

use std::collections::HashMap;

use crate::types::{BstRecordStore, LinearRecordStore};

impl BstRecordStore {
    /// Create an empty BST-backed store with the given key policy.
    ///
    /// Case sensitivity is fixed for the store's lifetime and applies
    /// uniformly to insert, find, and update.
    ///
    /// # Examples
    ///
    /// ```
    /// use bststore::BstRecordStore;
    ///
    /// let store = BstRecordStore::new(false);
    /// assert!(store.is_empty());
    /// assert!(!store.case_sensitive());
    /// ```
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            root: None,
            case_sensitive,
            size: 0,
        }
    }

    /// The key comparison policy this store was constructed with.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl Default for BstRecordStore {
    /// Create a case-sensitive store.
    fn default() -> Self {
        Self::new(true)
    }
}

impl LinearRecordStore {
    /// Create an empty hash-indexed store with the given key policy.
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            case_sensitive,
        }
    }

    /// The key comparison policy this store was constructed with.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl Default for LinearRecordStore {
    /// Create a case-sensitive store.
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = BstRecordStore::new(true);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert!(store.root.is_none());
    }

    #[test]
    fn test_default_is_case_sensitive() {
        assert!(BstRecordStore::default().case_sensitive());
        assert!(LinearRecordStore::default().case_sensitive());
    }
}
