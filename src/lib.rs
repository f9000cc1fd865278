//! In-memory keyed record store backed by a binary search tree, with a
//! lossless structural codec and traversal utilities.
//!
//! The crate has three layers:
//!
//! - [`BstRecordStore`]: a keyed collection of [`Record`]s organized as an
//!   unbalanced BST, with insert/find/update/list semantics and a
//!   configurable case-sensitivity policy. [`LinearRecordStore`] is the
//!   hash-indexed baseline with the identical external contract.
//! - [`codec`]: pure conversion between [`TreeNode`] graphs and
//!   nested-triple [`Structure`]s, honoring the round-trip law
//!   `flatten(build(s)) == s`.
//! - [`inspect`]: read-only analytics (height, node/leaf counts, in-order
//!   listing) and display-only renderers over arbitrary trees.
//!
//! Everything is single-threaded and synchronous; ownership of nodes is
//! strictly hierarchical, so dropping a store drops its whole tree.

mod construction;
mod error;
mod get_operations;
mod insert_operations;
mod linear;
mod macros;
mod node;
mod types;
mod validation;

pub mod codec;
pub mod inspect;
pub mod iteration;

pub use codec::{build, flatten, Structure};
pub use error::{BstError, BstResult, KeyResult, ModifyResult};
pub use inspect::TreeStats;
pub use iteration::{InOrderIterator, RecordIterator};
pub use types::{BstRecordStore, LinearRecordStore, Record, TreeNode};

impl BstRecordStore {
    // ============================================================================
    // OTHER API OPERATIONS
    // ============================================================================

    /// Returns the number of records in the store.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Height of the underlying tree: 0 when empty, 1 for a single record.
    pub fn height(&self) -> usize {
        inspect::height(self.root.as_deref())
    }

    /// Analytics for the underlying tree shape.
    pub fn stats(&self) -> TreeStats {
        inspect::stats(self.root.as_deref())
    }
}
