//! Core types and data structures for the record stores.
//!
//! This module contains the fundamental data structures used throughout the
//! crate: the user-facing `Record`, the generic `TreeNode` ownership graph,
//! and the two store types built on top of them.

use std::collections::HashMap;

// ============================================================================
// KEY POLICY
// ============================================================================

/// Normalize a key under the store's comparison policy: identity when
/// case-sensitive, lowercased otherwise. Both equality and ordering derive
/// from this one function.
pub(crate) fn normalize_key(key: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        key.to_string()
    } else {
        key.to_lowercase()
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A keyed user record.
///
/// Identity is `key`; `display_name` and `contact` are payload. Once a
/// record is inserted into a store, only `contact` may change (via the
/// store's update operation). The key field is required at the type level,
/// so there is no runtime "does this record have a key" check anywhere.
///
/// # Examples
///
/// ```
/// use bststore::Record;
///
/// let rec = Record::new("aakash123", "Aakash", "aakash@example.com");
/// assert_eq!(rec.key, "aakash123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Unique key under the owning store's normalization.
    pub key: String,
    /// Human-readable name.
    pub display_name: String,
    /// Contact details; the only field mutable after insertion.
    pub contact: String,
}

impl Record {
    /// Create a record from its three fields.
    pub fn new(key: &str, display_name: &str, contact: &str) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            contact: contact.to_string(),
        }
    }

    /// One-line human-readable summary of this record.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Key: {}, Name: {}, Contact: {}",
            self.key, self.display_name, self.contact
        )
    }
}

/// A node in a strict binary tree.
///
/// Each child slot exclusively owns its subtree; an absent child is an
/// explicit `None`, never a sentinel node. The node carries no behavior
/// beyond linkage: traversal and analytics live in [`crate::inspect`] and
/// the structural codec in [`crate::codec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<K> {
    /// The key stored at this node.
    pub key: K,
    /// Left subtree (keys strictly less, in BST use).
    pub left: Option<Box<TreeNode<K>>>,
    /// Right subtree (keys greater-or-equal, in BST use).
    pub right: Option<Box<TreeNode<K>>>,
}

/// A store entry: a record paired with its pre-normalized key.
///
/// The normalized key is computed once at insertion so that every
/// comparison on the descent is a plain string compare. Ordering and
/// equality are defined on the normalized key only.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    /// Key after the store's normalization (identity or lowercased).
    pub(crate) norm: String,
    /// The record itself.
    pub(crate) record: Record,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.norm == other.norm
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.norm.cmp(&other.norm)
    }
}

/// Record store backed by an unbalanced binary search tree.
///
/// Average-case O(log n) insert and find, O(n) in-order listing. Keys are
/// compared after a normalization fixed at construction time: identity
/// when case-sensitive, lowercasing otherwise. Duplicate (normalized-equal)
/// keys are rejected, so an in-order walk always yields strictly ascending
/// normalized keys.
///
/// Worst case degrades to linear on adversarially ordered inserts; no
/// rebalancing is performed. Callers needing guaranteed logarithmic bounds
/// must layer a balancing strategy on top.
///
/// # Examples
///
/// ```
/// use bststore::{BstRecordStore, Record};
///
/// let mut store = BstRecordStore::new(true);
/// store.insert(Record::new("bob", "Bob", "bob@example.com")).unwrap();
/// assert_eq!(store.find("bob").unwrap().display_name, "Bob");
/// assert!(store.find("BOB").is_none()); // case-sensitive store
/// ```
#[derive(Debug, Clone)]
pub struct BstRecordStore {
    /// Root of the ownership tree; `None` means the store is empty.
    pub(crate) root: Option<Box<TreeNode<Entry>>>,
    /// Key comparison policy, fixed at construction.
    pub(crate) case_sensitive: bool,
    /// Number of records linked into `root`.
    pub(crate) size: usize,
}

/// Record store backed by a hash index over an insertion-ordered vector.
///
/// Comparison baseline with the same external contract as
/// [`BstRecordStore`]. The one observable divergence: `list_all` returns
/// records in insertion order rather than ascending key order, so callers
/// may only assume identical membership across the two stores, never
/// identical listing order.
#[derive(Debug, Clone)]
pub struct LinearRecordStore {
    /// Records in insertion order.
    pub(crate) records: Vec<Record>,
    /// Normalized key -> index into `records`.
    pub(crate) index: HashMap<String, usize>,
    /// Key comparison policy, fixed at construction.
    pub(crate) case_sensitive: bool,
}
