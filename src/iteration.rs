//! Iterator implementations for tree traversal and record listing.

use crate::types::{BstRecordStore, Record, TreeNode};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// In-order iterator over the keys of a binary tree.
///
/// Visits left subtree, node, right subtree, using an explicit stack of
/// borrowed nodes. For a tree satisfying the BST invariant this yields
/// keys in ascending order; for arbitrary shapes it is simply the
/// left-self-right visit order.
pub struct InOrderIterator<'a, K> {
    stack: Vec<&'a TreeNode<K>>,
}

/// Iterator over a store's records in ascending normalized-key order.
pub struct RecordIterator<'a> {
    inner: InOrderIterator<'a, crate::types::Entry>,
}

// ============================================================================
// IN-ORDER ITERATOR IMPLEMENTATION
// ============================================================================

impl<'a, K> InOrderIterator<'a, K> {
    /// Create an iterator positioned at the leftmost node.
    pub fn new(root: Option<&'a TreeNode<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Push a node and its entire left spine onto the stack.
    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrderIterator<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

// ============================================================================
// STORE ITERATOR METHODS
// ============================================================================

impl BstRecordStore {
    /// Returns an iterator over all records in ascending key order
    /// (under the store's normalization).
    ///
    /// # Examples
    ///
    /// ```
    /// use bststore::{BstRecordStore, Record};
    ///
    /// let mut store = BstRecordStore::new(true);
    /// store.insert(Record::new("b", "B", "b@x")).unwrap();
    /// store.insert(Record::new("a", "A", "a@x")).unwrap();
    /// let keys: Vec<_> = store.records().map(|r| r.key.as_str()).collect();
    /// assert_eq!(keys, ["a", "b"]);
    /// ```
    pub fn records(&self) -> RecordIterator<'_> {
        RecordIterator {
            inner: InOrderIterator::new(self.root.as_deref()),
        }
    }
}

impl<'a> Iterator for RecordIterator<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.record)
    }
}
