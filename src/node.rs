use std::{cmp::Ordering, fmt, ops::Not};

use slab::Slab;

/// Link to a node in the arena, `None` stands for the null node.
pub(crate) type Link = Option<usize>;

/// Color of a node in [`RbTree`]. Null nodes are always black.
///
/// [`RbTree`]: crate::RbTree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => write!(f, "RED"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

/// Side of a child relative to its parent. Rotations and fixups are
/// written once for one side and mirrored through `!side`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Node corresponds to a single entry in RbTree instance. Nodes live in
/// the tree's arena, links are arena handles and own nothing.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl<K, V> Node<K, V> {
    // new entries always start red, detached.
    pub(crate) fn new(key: K, value: V) -> Node<K, V> {
        Node {
            key,
            value,
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, link: Link) {
        match side {
            Side::Left => self.left = link,
            Side::Right => self.right = link,
        }
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Read-only view of a node in [`RbTree`], or of the null node.
///
/// The null node is what search and navigation return when there is no
/// such entry: it is black, has no key and no value, and all its
/// navigation methods return the null node again. This allows chaining
/// without checking for absence at every step:
///
/// ```
/// use rbtree_index::RbTree;
///
/// let mut index: RbTree<i64, i64> = RbTree::new("example");
/// index.insert(10, 100);
/// assert!(index.search(&20).left().parent().is_null());
/// assert_eq!(index.search(&10).value(), Some(&100));
/// ```
///
/// A null node produced by [`RbTree::preorder`] and friends with
/// `include_nulls` remembers the node it hangs from, so that
/// [`NodeRef::depth`] is correct for it.
///
/// [`RbTree`]: crate::RbTree
/// [`RbTree::preorder`]: crate::RbTree::preorder
pub struct NodeRef<'a, K, V> {
    nodes: &'a Slab<Node<K, V>>,
    link: Link,
    parent: Link, // parent of a null view, unused otherwise.
}

impl<'a, K, V> Clone for NodeRef<'a, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for NodeRef<'a, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(nodes: &'a Slab<Node<K, V>>, link: Link) -> NodeRef<'a, K, V> {
        NodeRef {
            nodes,
            link,
            parent: None,
        }
    }

    pub(crate) fn null(nodes: &'a Slab<Node<K, V>>, parent: Link) -> NodeRef<'a, K, V> {
        NodeRef {
            nodes,
            link: None,
            parent,
        }
    }

    #[inline]
    pub(crate) fn link(&self) -> Link {
        self.link
    }

    #[inline]
    pub(crate) fn is_from(&self, nodes: &Slab<Node<K, V>>) -> bool {
        std::ptr::eq(self.nodes, nodes)
    }

    #[inline]
    fn node(&self) -> Option<&'a Node<K, V>> {
        let nodes = self.nodes;
        self.link.map(|index| &nodes[index])
    }

    /// Return true if this is the null node.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.link.is_none()
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    /// Return true for black nodes, the null node is black.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    pub fn color(&self) -> Color {
        self.node().map_or(Color::Black, |node| node.color)
    }

    /// Return the entry's key, `None` for the null node.
    pub fn key(&self) -> Option<&'a K> {
        self.node().map(|node| &node.key)
    }

    /// Return the entry's value, `None` for the null node.
    pub fn value(&self) -> Option<&'a V> {
        self.node().map(|node| &node.value)
    }

    pub fn left(&self) -> NodeRef<'a, K, V> {
        self.child(Side::Left)
    }

    pub fn right(&self) -> NodeRef<'a, K, V> {
        self.child(Side::Right)
    }

    fn child(&self, side: Side) -> NodeRef<'a, K, V> {
        match self.node() {
            Some(node) => match node.child(side) {
                link @ Some(_) => NodeRef::new(self.nodes, link),
                None => NodeRef::null(self.nodes, self.link),
            },
            None => NodeRef::null(self.nodes, None),
        }
    }

    /// Return parent node, the null node for root.
    pub fn parent(&self) -> NodeRef<'a, K, V> {
        let parent = match self.node() {
            Some(node) => node.parent,
            None => self.parent,
        };
        NodeRef::new(self.nodes, parent)
    }

    /// Number of links between this node and the root, walking up parent
    /// links. O(height), meant for diagnostics and rendering.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.parent();
        while !node.is_null() {
            depth += 1;
            node = node.parent();
        }
        depth
    }
}

impl<'a, K, V> PartialEq for NodeRef<'a, K, V>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<'a, K, V> PartialOrd for NodeRef<'a, K, V>
where
    K: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key().partial_cmp(&other.key())
    }
}

impl<'a, K, V> fmt::Debug for NodeRef<'a, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.node() {
            Some(node) => f
                .debug_struct("NodeRef")
                .field("key", &node.key)
                .field("value", &node.value)
                .field("color", &node.color)
                .finish(),
            None => f.write_str("NodeRef(null)"),
        }
    }
}
