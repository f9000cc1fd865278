//! INSERT operations for the BST-backed record store.

use crate::error::{BstError, ModifyResult};
use crate::types::{normalize_key, BstRecordStore, Entry, Record, TreeNode};

impl BstRecordStore {
    /// Insert a record, taking ownership of it.
    ///
    /// Fails with [`BstError::InvalidRecord`] if the record's key is empty
    /// and with [`BstError::DuplicateKey`] if a normalized-equal key is
    /// already present (checked by the same descent as `find`, before any
    /// mutation). On success the new node is threaded into the first empty
    /// slot on the comparison path and `len` grows by one; on failure the
    /// tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bststore::{BstRecordStore, Record};
    ///
    /// let mut store = BstRecordStore::new(false);
    /// store.insert(Record::new("Ada", "Ada L.", "ada@example.com")).unwrap();
    ///
    /// let dup = store.insert(Record::new("ADA", "Other", "x@example.com"));
    /// assert!(dup.unwrap_err().is_duplicate_key());
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn insert(&mut self, record: Record) -> ModifyResult<()> {
        if record.key.is_empty() {
            return Err(BstError::invalid_record("key cannot be empty"));
        }

        let norm = normalize_key(&record.key, self.case_sensitive);
        if self.find_node(&norm).is_some() {
            return Err(BstError::duplicate_key(&record.key));
        }

        insert_recursive(&mut self.root, Entry { norm, record });
        self.size += 1;
        Ok(())
    }

    /// Insert with invariant validation before and after the mutation.
    ///
    /// Like [`insert`](Self::insert), but additionally reports
    /// [`BstError::DataIntegrityError`] if the tree violates its own
    /// invariants on either side of the operation.
    pub fn try_insert(&mut self, record: Record) -> ModifyResult<()> {
        if let Err(e) = self.check_invariants_detailed() {
            return Err(BstError::data_integrity("pre-insert validation", &e));
        }
        self.insert(record)?;
        if let Err(e) = self.check_invariants_detailed() {
            return Err(BstError::data_integrity("post-insert validation", &e));
        }
        Ok(())
    }
}

/// Thread a new leaf into the first empty slot on the comparison path:
/// descend left while the new key is less, right otherwise.
fn insert_recursive(slot: &mut Option<Box<TreeNode<Entry>>>, entry: Entry) {
    match slot {
        None => *slot = Some(Box::new(TreeNode::leaf(entry))),
        Some(node) => {
            if entry < node.key {
                insert_recursive(&mut node.left, entry);
            } else {
                insert_recursive(&mut node.right, entry);
            }
        }
    }
}
