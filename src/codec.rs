//! Structural codec: lossless conversion between nested-triple structures
//! and `TreeNode` ownership graphs.
//!
//! A structure is either the empty marker, a bare scalar (a leaf), or a
//! triple `(left, value, right)` (an internal node). The codec is pure and
//! enforces no ordering invariant, so it round-trips arbitrary binary tree
//! shapes, not just search trees.
//!
//! The round-trip law `flatten(build(s)) == s` holds exactly for every
//! structure written in that convention; it relies on `flatten` emitting a
//! childless node as a bare scalar rather than a triple of two empty
//! markers.

use std::fmt;
use std::str::FromStr;

use crate::error::{BstError, BstResult};
use crate::types::TreeNode;

/// Nested-triple representation of a binary tree.
///
/// The textual form (via `Display`/[`Structure::parse`]) matches the
/// tuple notation of the triple convention: `None` for [`Structure::Empty`],
/// the scalar itself for [`Structure::Leaf`], and `(left, value, right)`
/// for [`Structure::Triple`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structure<K> {
    /// Absent subtree.
    Empty,
    /// A leaf, written as a bare scalar.
    Leaf(K),
    /// An internal node with its two (possibly empty) subtrees.
    Triple(Box<Structure<K>>, K, Box<Structure<K>>),
}

/// Build a tree from its nested-triple structure.
///
/// Deterministic and total over well-formed input; recursion depth equals
/// the structure's depth.
///
/// # Examples
///
/// ```
/// use bststore::{build, structure};
///
/// let root = build(structure!((1, 2, 3))).unwrap();
/// assert_eq!(root.key, 2);
/// assert_eq!(root.left.unwrap().key, 1);
/// assert_eq!(root.right.unwrap().key, 3);
/// ```
pub fn build<K>(structure: Structure<K>) -> Option<Box<TreeNode<K>>> {
    match structure {
        Structure::Empty => None,
        Structure::Leaf(key) => Some(Box::new(TreeNode::leaf(key))),
        Structure::Triple(left, key, right) => Some(Box::new(TreeNode::with_children(
            key,
            build(*left),
            build(*right),
        ))),
    }
}

/// Convert a tree back to its nested-triple structure.
///
/// A childless node becomes a bare scalar, not a triple of empty markers.
/// This asymmetry is what makes `flatten(build(s)) == s` hold for
/// structures written in the triple convention.
///
/// # Examples
///
/// ```
/// use bststore::{build, flatten, structure, Structure};
///
/// let s = structure!(((1, 3, _), 2, ((_, 3, 4), 5, (6, 7, 8))));
/// let root = build(s.clone());
/// assert_eq!(flatten(root.as_deref()), s);
/// ```
pub fn flatten<K: Clone>(node: Option<&TreeNode<K>>) -> Structure<K> {
    match node {
        None => Structure::Empty,
        Some(n) if n.is_leaf() => Structure::Leaf(n.key.clone()),
        Some(n) => Structure::Triple(
            Box::new(flatten(n.left.as_deref())),
            n.key.clone(),
            Box::new(flatten(n.right.as_deref())),
        ),
    }
}

impl<K: FromStr> Structure<K> {
    /// Parse the textual nested-triple notation.
    ///
    /// Accepts `None` for an empty subtree, a bare scalar for a leaf, and
    /// `(left, value, right)` for an internal node, with arbitrary
    /// whitespace between tokens. Anything else is rejected with
    /// [`BstError::MalformedStructure`] before any tree is constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bststore::{structure, Structure};
    ///
    /// let s = Structure::<i64>::parse("((1, 3, None), 2, (6, 7, 8))").unwrap();
    /// assert_eq!(s, structure!(((1, 3, _), 2, (6, 7, 8))));
    ///
    /// assert!(Structure::<i64>::parse("(1, 2)").is_err());
    /// ```
    pub fn parse(input: &str) -> BstResult<Self> {
        let mut parser = Parser { src: input, pos: 0 };
        let structure = parser.structure()?;
        parser.skip_whitespace();
        if parser.pos != parser.src.len() {
            return Err(BstError::malformed_structure(&format!(
                "trailing input at byte {}",
                parser.pos
            )));
        }
        Ok(structure)
    }
}

impl<K: fmt::Display> fmt::Display for Structure<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::Empty => write!(f, "None"),
            Structure::Leaf(key) => write!(f, "{}", key),
            Structure::Triple(left, key, right) => write!(f, "({}, {}, {})", left, key, right),
        }
    }
}

/// Recursive-descent parser over the tuple notation.
struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn structure<K: FromStr>(&mut self) -> BstResult<Structure<K>> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(BstError::malformed_structure("unexpected end of input")),
            Some('(') => self.triple(),
            Some(_) => {
                let start = self.pos;
                let token = self.scalar_token();
                if token.is_empty() {
                    return Err(BstError::malformed_structure(&format!(
                        "expected a scalar at byte {}",
                        start
                    )));
                }
                if token == "None" {
                    return Ok(Structure::Empty);
                }
                let key = token.parse::<K>().map_err(|_| {
                    BstError::malformed_structure(&format!(
                        "invalid scalar '{}' at byte {}",
                        token, start
                    ))
                })?;
                Ok(Structure::Leaf(key))
            }
        }
    }

    fn triple<K: FromStr>(&mut self) -> BstResult<Structure<K>> {
        self.expect('(')?;
        let left = self.structure()?;
        self.expect(',')?;
        // The middle element of a triple is always a scalar key.
        self.skip_whitespace();
        let start = self.pos;
        let token = self.scalar_token();
        if token.is_empty() {
            return Err(BstError::malformed_structure(&format!(
                "expected a key at byte {}",
                start
            )));
        }
        let key = token.parse::<K>().map_err(|_| {
            BstError::malformed_structure(&format!("invalid key '{}' at byte {}", token, start))
        })?;
        self.expect(',')?;
        let right = self.structure()?;
        self.expect(')')?;
        Ok(Structure::Triple(Box::new(left), key, Box::new(right)))
    }

    fn scalar_token(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == ',' || c == '(' || c == ')' || c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }

    fn expect(&mut self, expected: char) -> BstResult<()> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(BstError::malformed_structure(&format!(
                "expected '{}' but found '{}' at byte {}",
                expected, c, self.pos
            ))),
            None => Err(BstError::malformed_structure(&format!(
                "expected '{}' but input ended",
                expected
            ))),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }
}
