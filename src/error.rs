use std::fmt;

/// Error enumerates over all possible errors that this package
/// shall return.
///
/// None of the read or write operations on [`RbTree`] fail, a miss is
/// reported as a null node or `None`. Errors are reported only by
/// [`RbTree::validate`], when the tree structure is found broken.
///
/// [`RbTree`]: crate::RbTree
/// [`RbTree::validate`]: crate::RbTree::validate
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error<K>
where
    K: fmt::Debug,
{
    /// Fatal case, root node must always be black.
    #[error("root node is red")]
    RedRoot,
    /// Fatal case, a red node has a red child.
    #[error("consecutive red nodes")]
    ConsecutiveReds,
    /// Fatal case, black height differ between left and right subtree.
    /// The String component of this variant can be used for debugging.
    #[error("unbalanced blacks, {0}")]
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order. Carries the
    /// offending key followed by the ancestor key it is ordered against.
    #[error("sort error, key {0:?} ancestor {1:?}")]
    SortError(K, K),
    /// Fatal case, parent link of a node does not point back to the node
    /// that holds it as child.
    #[error("broken link, {0}")]
    BrokenLink(String),
    /// Fatal case, number of reachable nodes differ from the book-kept
    /// count, (counted, book-kept).
    #[error("size mismatch, counted {0} expected {1}")]
    SizeMismatch(usize, usize),
}
