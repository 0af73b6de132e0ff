//! Red-black tree index, an ordered key/value container with O(log n)
//! worst case height, backed by a slab arena with parent links.
//!
//! ```
//! use rbtree_index::RbTree;
//!
//! let mut index: RbTree<i64, &str> = RbTree::new("example");
//! index.insert(55, "a");
//! index.insert(40, "b");
//! index.insert(58, "c");
//! index.insert(42, "d");
//!
//! assert_eq!(index.minimum().key(), Some(&40));
//! let node = index.successor(index.search(&42));
//! assert_eq!(node.key(), Some(&55));
//! assert!(index.validate().is_ok());
//! ```

mod depth;
mod empty;
mod error;
mod node;
mod rbtree;
mod render;

pub use crate::depth::Depth;
pub use crate::empty::Empty;
pub use crate::error::Error;
pub use crate::node::{Color, NodeRef};
pub use crate::rbtree::{Iter, RbTree, Stats};
