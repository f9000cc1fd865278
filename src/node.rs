//! Node construction and node-level helpers for `TreeNode`.

use crate::types::TreeNode;

impl<K> TreeNode<K> {
    /// Creates a childless node holding `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bststore::TreeNode;
    ///
    /// let node = TreeNode::leaf(7);
    /// assert!(node.is_leaf());
    /// ```
    pub fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Creates a node with the given child subtrees.
    pub fn with_children(
        key: K,
        left: Option<Box<TreeNode<K>>>,
        right: Option<Box<TreeNode<K>>>,
    ) -> Self {
        Self { key, left, right }
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_construction() {
        let node = TreeNode::leaf("a");
        assert_eq!(node.key, "a");
        assert!(node.is_leaf());
    }

    #[test]
    fn test_with_children() {
        let node = TreeNode::with_children(
            2,
            Some(Box::new(TreeNode::leaf(1))),
            Some(Box::new(TreeNode::leaf(3))),
        );
        assert!(!node.is_leaf());
        assert_eq!(node.left.as_ref().unwrap().key, 1);
        assert_eq!(node.right.as_ref().unwrap().key, 3);
    }

    #[test]
    fn test_one_sided_node_is_not_leaf() {
        let node = TreeNode::with_children(2, Some(Box::new(TreeNode::leaf(1))), None);
        assert!(!node.is_leaf());
    }
}
