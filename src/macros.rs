//! Convenience macros for building structural codec literals.

/// Build a [`Structure`](crate::Structure) literal from nested-triple
/// syntax: `_` is the empty marker, a bare expression is a leaf scalar,
/// and `(left, value, right)` is an internal node.
///
/// # Examples
///
/// ```
/// use bststore::{structure, Structure};
///
/// let s: Structure<i64> = structure!(((1, 3, _), 2, ((_, 3, 4), 5, (6, 7, 8))));
/// assert_eq!(s.to_string(), "((1, 3, None), 2, ((None, 3, 4), 5, (6, 7, 8)))");
/// ```
#[macro_export]
macro_rules! structure {
    (_) => {
        $crate::Structure::Empty
    };
    (($left:tt, $value:expr, $right:tt)) => {
        $crate::Structure::Triple(
            ::std::boxed::Box::new($crate::structure!($left)),
            $value,
            ::std::boxed::Box::new($crate::structure!($right)),
        )
    };
    ($value:expr) => {
        $crate::Structure::Leaf($value)
    };
}
