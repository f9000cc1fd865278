//! GET and UPDATE operations for the BST-backed record store.

use std::cmp::Ordering;

use crate::error::{BstError, KeyResult};
use crate::types::{normalize_key, BstRecordStore, Entry, Record, TreeNode};

impl BstRecordStore {
    /// Look up a record by key.
    ///
    /// A miss is a normal outcome, not an error: an empty key or a key not
    /// present after the standard descent both return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bststore::{BstRecordStore, Record};
    ///
    /// let mut store = BstRecordStore::new(false);
    /// store.insert(Record::new("User1", "U", "u@example.com")).unwrap();
    /// assert!(store.find("user1").is_some());
    /// assert!(store.find("user2").is_none());
    /// ```
    pub fn find(&self, key: &str) -> Option<&Record> {
        if key.is_empty() {
            return None;
        }
        let norm = normalize_key(key, self.case_sensitive);
        self.find_node(&norm).map(|node| &node.key.record)
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Replace the contact field of the record stored under `key`.
    ///
    /// The record keeps its position in the tree; nothing is re-keyed or
    /// re-linked. Fails with [`BstError::KeyNotFound`] when the key is
    /// absent (or empty).
    ///
    /// # Examples
    ///
    /// ```
    /// use bststore::{BstRecordStore, Record};
    ///
    /// let mut store = BstRecordStore::new(true);
    /// store.insert(Record::new("bob", "Bob", "old@example.com")).unwrap();
    /// store.update("bob", "new@example.com").unwrap();
    /// assert_eq!(store.find("bob").unwrap().contact, "new@example.com");
    /// ```
    pub fn update(&mut self, key: &str, new_contact: &str) -> KeyResult<()> {
        if key.is_empty() {
            return Err(BstError::KeyNotFound);
        }
        let norm = normalize_key(key, self.case_sensitive);

        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match norm.as_str().cmp(node.key.norm.as_str()) {
                Ordering::Equal => {
                    node.key.record.contact = new_contact.to_string();
                    return Ok(());
                }
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }
        Err(BstError::KeyNotFound)
    }

    /// Return all records in ascending key order under the store's
    /// normalization (in-order traversal of the tree).
    pub fn list_all(&self) -> Vec<&Record> {
        self.records().collect()
    }

    /// Standard BST descent on the pre-normalized key: equal returns,
    /// less goes left, greater goes right.
    pub(crate) fn find_node(&self, norm: &str) -> Option<&TreeNode<Entry>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match norm.cmp(node.key.norm.as_str()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }
}
