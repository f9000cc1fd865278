//! Read-only analytics and renderers for `TreeNode` graphs.
//!
//! Everything here walks a borrowed tree without mutating it: height and
//! node counting, the in-order key listing, and the display-only text
//! renderers. Nothing prints; renderers return a `String` so callers
//! decide where output goes.

use std::fmt::Display;
use std::fmt::Write as _;

use crate::iteration::InOrderIterator;
use crate::types::TreeNode;

/// Aggregate analytics for a tree, computed in a single pass per metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Longest root-to-node path; 0 for an empty tree, 1 for a single node.
    pub height: usize,
    /// Total node count.
    pub nodes: usize,
    /// Nodes with no children.
    pub leaves: usize,
    /// Nodes with at least one child (`nodes - leaves`).
    pub internal: usize,
}

/// Height of a tree: 0 for empty, else one more than the taller subtree.
pub fn height<K>(root: Option<&TreeNode<K>>) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + height(node.left.as_deref()).max(height(node.right.as_deref())),
    }
}

/// Total number of nodes in a tree.
pub fn node_count<K>(root: Option<&TreeNode<K>>) -> usize {
    count_nodes(root).0
}

/// Number of childless nodes in a tree.
pub fn leaf_count<K>(root: Option<&TreeNode<K>>) -> usize {
    count_nodes(root).1
}

/// Count total and leaf nodes in one combined recursive pass.
fn count_nodes<K>(node: Option<&TreeNode<K>>) -> (usize, usize) {
    match node {
        None => (0, 0),
        Some(n) if n.is_leaf() => (1, 1),
        Some(n) => {
            let (left_total, left_leaves) = count_nodes(n.left.as_deref());
            let (right_total, right_leaves) = count_nodes(n.right.as_deref());
            (1 + left_total + right_total, left_leaves + right_leaves)
        }
    }
}

/// Compute all tree statistics at once.
///
/// # Examples
///
/// ```
/// use bststore::{build, inspect, structure};
///
/// let root = build(structure!((1, 2, (_, 3, 4))));
/// let stats = inspect::stats(root.as_deref());
/// assert_eq!(stats.height, 3);
/// assert_eq!(stats.nodes, 4);
/// assert_eq!(stats.leaves, 2);
/// assert_eq!(stats.internal, 2);
/// ```
pub fn stats<K>(root: Option<&TreeNode<K>>) -> TreeStats {
    let (nodes, leaves) = count_nodes(root);
    TreeStats {
        height: height(root),
        nodes,
        leaves,
        internal: nodes - leaves,
    }
}

/// In-order key listing: left, self, right.
///
/// Ascending whenever the tree satisfies the BST invariant; an empty tree
/// produces an empty vector.
pub fn in_order<K>(root: Option<&TreeNode<K>>) -> Vec<&K> {
    InOrderIterator::new(root).collect()
}

/// Render a tree rotated 90 degrees counter-clockwise: the right subtree
/// appears above its parent, the left below, each level indented one
/// `spacer` deeper. An absent subtree under an internal node renders
/// as `*`.
pub fn render_rotated<K: Display>(root: Option<&TreeNode<K>>, spacer: &str) -> String {
    let mut out = String::new();
    render_rotated_node(root, spacer, 0, &mut out);
    out
}

fn render_rotated_node<K: Display>(
    node: Option<&TreeNode<K>>,
    spacer: &str,
    level: usize,
    out: &mut String,
) {
    match node {
        None => {
            let _ = writeln!(out, "{}*", spacer.repeat(level));
        }
        Some(n) if n.is_leaf() => {
            let _ = writeln!(out, "{}{}", spacer.repeat(level), n.key);
        }
        Some(n) => {
            render_rotated_node(n.right.as_deref(), spacer, level + 1, out);
            let _ = writeln!(out, "{}{}", spacer.repeat(level), n.key);
            render_rotated_node(n.left.as_deref(), spacer, level + 1, out);
        }
    }
}

/// Render a tree top-down with explicit `L---`/`R---` markers, so the
/// left/right distinction is visible even for one-sided nodes.
///
/// # Examples
///
/// ```
/// use bststore::{build, inspect, structure};
///
/// let root = build(structure!((1, 2, _)));
/// let text = inspect::render_horizontal(root.as_deref());
/// assert_eq!(text, "Root: 2\n  L--- 1\n  R--- None\n");
/// ```
pub fn render_horizontal<K: Display>(root: Option<&TreeNode<K>>) -> String {
    let mut out = String::new();
    render_horizontal_node(root, 0, "Root: ", &mut out);
    out
}

fn render_horizontal_node<K: Display>(
    node: Option<&TreeNode<K>>,
    level: usize,
    prefix: &str,
    out: &mut String,
) {
    let indent = "  ".repeat(level);
    match node {
        None => {
            let _ = writeln!(out, "{}{}None", indent, prefix);
        }
        Some(n) => {
            let _ = writeln!(out, "{}{}{}", indent, prefix, n.key);
            if !n.is_leaf() {
                render_horizontal_node(n.left.as_deref(), level + 1, "L--- ", out);
                render_horizontal_node(n.right.as_deref(), level + 1, "R--- ", out);
            }
        }
    }
}
