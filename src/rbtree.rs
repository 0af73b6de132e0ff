use std::{
    borrow::Borrow,
    fmt, mem,
    ops::{Bound, Index, IndexMut, RangeBounds},
};

use log::{debug, trace};
use rand::Rng;
use slab::Slab;

use crate::depth::Depth;
use crate::error::Error;
use crate::node::{Color, Link, Node, NodeRef, Side};

/// RbTree manage a single instance of in-memory index using
/// [red-black][rbtree] tree.
///
/// Nodes are kept in an arena and refer to each other by handle, parent
/// links included, so that rotations and fixups are O(1) and the tree
/// owns every node exactly once.
///
/// Entries are unique by key. Inserting a key that is already present is
/// a no-op and leaves the old value in place, use [`RbTree::get_mut`] or
/// the index operator to update a value in place.
///
/// [rbtree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct RbTree<K, V> {
    name: String,
    nodes: Slab<Node<K, V>>,
    root: Link,
    n_count: usize, // number of entries in the tree.
}

/// Different ways to construct a new RbTree instance.
impl<K, V> RbTree<K, V>
where
    K: Ord,
{
    /// Create an empty instance of RbTree, identified by `name`.
    /// Applications can choose unique names.
    pub fn new<S>(name: S) -> RbTree<K, V>
    where
        S: AsRef<str>,
    {
        RbTree {
            name: name.as_ref().to_string(),
            nodes: Slab::new(),
            root: None,
            n_count: Default::default(),
        }
    }

    /// Create a new instance of RbTree and load it with entries from
    /// `iter`. Entries whose key was already loaded are skipped, the
    /// first value wins.
    pub fn load_from<S, I>(name: S, iter: I) -> RbTree<K, V>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut index = RbTree::new(name);
        for (key, value) in iter {
            index.insert(key, value);
        }
        index
    }
}

/// Maintenance API.
impl<K, V> RbTree<K, V> {
    /// Identify this instance. Applications can choose unique names while
    /// creating RbTree instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Return quickly with basic statisics, only entries() and
    /// node_size() methods are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node<K, V>>())
    }
}

/// Write operations on RbTree instance.
impl<K, V> RbTree<K, V>
where
    K: Ord,
{
    /// Insert a new {key, value} entry in the index and return true. If
    /// key is already present this is a no-op, the existing entry is left
    /// untouched and false is returned.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let (mut parent, mut side) = (None, Side::Left);
        let mut link = self.root;
        while let Some(index) = link {
            side = match key.cmp(&self.nodes[index].key) {
                std::cmp::Ordering::Less => Side::Left,
                std::cmp::Ordering::Greater => Side::Right,
                std::cmp::Ordering::Equal => {
                    debug!("{}: insert, key already present, ignored", self.name);
                    return false;
                }
            };
            parent = Some(index);
            link = self.nodes[index].child(side);
        }

        let mut node = Node::new(key, value);
        node.parent = parent;
        let index = self.nodes.insert(node);
        match parent {
            Some(parent) => self.nodes[parent].set_child(side, Some(index)),
            None => self.root = Some(index),
        }
        self.n_count += 1;

        self.insert_fixup(index);
        true
    }

    /// Insert `key` with a default value, for indexes that carry no
    /// payload like ``RbTree<K, Empty>``. Same semantics as
    /// [`RbTree::insert`].
    pub fn insert_key(&mut self, key: K) -> bool
    where
        V: Default,
    {
        self.insert(key, V::default())
    }

    /// Delete key from this instance and return its value. If key is
    /// not present, then delete is effectively a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let z = match self.descend(key) {
            Some(z) => z,
            None => {
                debug!("{}: delete, key not found, ignored", self.name);
                return None;
            }
        };

        // `x` takes the vacated slot, `x_parent` tracks its parent since
        // `x` can be the null node.
        let (z_left, z_right) = (self.nodes[z].left, self.nodes[z].right);
        let (x, x_parent, y_original_color) = match (z_left, z_right) {
            (None, _) => {
                let parent = self.nodes[z].parent;
                self.transplant(z, z_right);
                (z_right, parent, self.nodes[z].color)
            }
            (_, None) => {
                let parent = self.nodes[z].parent;
                self.transplant(z, z_left);
                (z_left, parent, self.nodes[z].color)
            }
            (Some(_), Some(right)) => {
                let y = edge(&self.nodes, right, Side::Left);
                let y_original_color = self.nodes[y].color;
                let x = self.nodes[y].right;
                let x_parent = if self.nodes[y].parent == Some(z) {
                    Some(y)
                } else {
                    let y_parent = self.nodes[y].parent;
                    self.transplant(y, x);
                    self.nodes[y].right = z_right;
                    self.nodes[right].parent = Some(y);
                    y_parent
                };
                self.transplant(z, Some(y));
                self.nodes[y].left = z_left;
                if let Some(left) = z_left {
                    self.nodes[left].parent = Some(y);
                }
                self.nodes[y].color = self.nodes[z].color;
                (x, x_parent, y_original_color)
            }
        };

        let node = self.nodes.remove(z);
        self.n_count -= 1;

        // removing a red node never changes black height.
        if y_original_color == Color::Black {
            self.delete_fixup(x, x_parent);
        }
        Some(node.value)
    }

    /// Validate red-black tree with following rules:
    ///
    /// * Root node is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    /// * Parent links agree with child links.
    /// * Number of reachable nodes match the entry count.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error<K>>
    where
        K: Clone + fmt::Debug,
    {
        if is_red(&self.nodes, self.root) {
            return Err(Error::RedRoot);
        }

        let mut depths = Depth::new();
        let mut count = 0;
        let bounds = (None, None);
        let blacks =
            self.validate_tree(self.root, None, bounds, false, 0, 0, &mut depths, &mut count)?;
        if count != self.n_count {
            return Err(Error::SizeMismatch(count, self.n_count));
        }

        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<K, V>>());
        stats.set_blacks(blacks);
        stats.set_depths(depths);
        Ok(stats)
    }
}

/// Read operations on RbTree instance.
impl<K, V> RbTree<K, V>
where
    K: Ord,
{
    /// Return the node for key, the null node if key is not present.
    pub fn search<Q>(&self, key: &Q) -> NodeRef<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        NodeRef::new(&self.nodes, self.descend(key))
    }

    /// Get the value for key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.descend(key).map(|index| &self.nodes[index].value)
    }

    /// Get a mutable reference to the value for key. Only the value can
    /// be mutated, position of the entry in the tree is untouched.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self.descend(key)?;
        Some(&mut self.nodes[index].value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.descend(key).is_some()
    }

    /// Return the root node, the null node if index is empty.
    pub fn root(&self) -> NodeRef<'_, K, V> {
        NodeRef::new(&self.nodes, self.root)
    }

    /// Return the node with the smallest key.
    pub fn minimum(&self) -> NodeRef<'_, K, V> {
        let link = self.root.map(|root| edge(&self.nodes, root, Side::Left));
        NodeRef::new(&self.nodes, link)
    }

    /// Return the node with the largest key.
    pub fn maximum(&self) -> NodeRef<'_, K, V> {
        let link = self.root.map(|root| edge(&self.nodes, root, Side::Right));
        NodeRef::new(&self.nodes, link)
    }

    /// Return the node with the smallest key in the subtree under `node`.
    pub fn subtree_minimum(&self, node: NodeRef<'_, K, V>) -> NodeRef<'_, K, V> {
        let link = self.own(node).map(|index| edge(&self.nodes, index, Side::Left));
        NodeRef::new(&self.nodes, link)
    }

    /// Return the node with the largest key in the subtree under `node`.
    pub fn subtree_maximum(&self, node: NodeRef<'_, K, V>) -> NodeRef<'_, K, V> {
        let link = self.own(node).map(|index| edge(&self.nodes, index, Side::Right));
        NodeRef::new(&self.nodes, link)
    }

    /// Return the in-order successor of `node`, the null node if `node`
    /// holds the largest key.
    pub fn successor(&self, node: NodeRef<'_, K, V>) -> NodeRef<'_, K, V> {
        let link = self.own(node).and_then(|index| step(&self.nodes, index, Side::Right));
        NodeRef::new(&self.nodes, link)
    }

    /// Return the in-order predecessor of `node`, the null node if `node`
    /// holds the smallest key.
    pub fn predecessor(&self, node: NodeRef<'_, K, V>) -> NodeRef<'_, K, V> {
        let link = self.own(node).and_then(|index| step(&self.nodes, index, Side::Left));
        NodeRef::new(&self.nodes, link)
    }

    /// Return a random entry from this index.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<(&K, &V)> {
        let mut index = self.root?;

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let node = &self.nodes[index];
            let next = match rng.gen::<bool>() {
                true => node.left,
                false => node.right,
            };
            match next {
                Some(next) if at_depth > 0 => {
                    at_depth -= 1;
                    index = next;
                }
                _ => break Some((&node.key, &node.value)),
            }
        }
    }

    /// Return an iterator over all entries in this instance, in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            front: self.minimum().link(),
            back: self.maximum().link(),
        }
    }

    /// Range over all entries from low to high, use `rev()` on the
    /// returned iterator to range from high to low.
    pub fn range<Q, R>(&self, range: R) -> Iter<'_, K, V>
    where
        K: Borrow<Q>,
        R: RangeBounds<Q>,
        Q: Ord + ?Sized,
    {
        let front = self.lower_bound(range.start_bound());
        let back = self.upper_bound(range.end_bound());
        let (front, back) = match (front, back) {
            (Some(f), Some(b)) if self.nodes[f].key <= self.nodes[b].key => (front, back),
            _ => (None, None),
        };
        Iter {
            nodes: &self.nodes,
            front,
            back,
        }
    }

    /// Return nodes in pre-order. With `include_nulls`, every missing
    /// child is present as a null node at its structural position.
    pub fn preorder(&self, include_nulls: bool) -> Vec<NodeRef<'_, K, V>> {
        self.traverse(Order::Pre, include_nulls)
    }

    /// Return nodes in key order. Refer [`RbTree::preorder`] for
    /// `include_nulls`.
    pub fn inorder(&self, include_nulls: bool) -> Vec<NodeRef<'_, K, V>> {
        self.traverse(Order::In, include_nulls)
    }

    /// Return nodes in post-order. Refer [`RbTree::preorder`] for
    /// `include_nulls`.
    pub fn postorder(&self, include_nulls: bool) -> Vec<NodeRef<'_, K, V>> {
        self.traverse(Order::Post, include_nulls)
    }
}

impl<K, V> RbTree<K, V>
where
    K: Ord,
{
    fn descend<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = self.root;
        while let Some(index) = link {
            let node = &self.nodes[index];
            let nkey: &Q = node.key.borrow();
            link = match key.cmp(nkey) {
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
                std::cmp::Ordering::Equal => return Some(index),
            };
        }
        None
    }

    // first node whose key is within the lower bound.
    fn lower_bound<Q>(&self, bound: Bound<&Q>) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut link, mut found) = (self.root, None);
        while let Some(index) = link {
            let node = &self.nodes[index];
            let key: &Q = node.key.borrow();
            let ok = match bound {
                Bound::Included(low) => key >= low,
                Bound::Excluded(low) => key > low,
                Bound::Unbounded => true,
            };
            link = if ok {
                found = Some(index);
                node.left
            } else {
                node.right
            };
        }
        found
    }

    // last node whose key is within the upper bound.
    fn upper_bound<Q>(&self, bound: Bound<&Q>) -> Link
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut link, mut found) = (self.root, None);
        while let Some(index) = link {
            let node = &self.nodes[index];
            let key: &Q = node.key.borrow();
            let ok = match bound {
                Bound::Included(high) => key <= high,
                Bound::Excluded(high) => key < high,
                Bound::Unbounded => true,
            };
            link = if ok {
                found = Some(index);
                node.right
            } else {
                node.left
            };
        }
        found
    }

    // nodes handed out by another tree are treated as the null node.
    fn own(&self, node: NodeRef<'_, K, V>) -> Link {
        if node.is_from(&self.nodes) {
            node.link()
        } else {
            None
        }
    }

    fn traverse(&self, order: Order, include_nulls: bool) -> Vec<NodeRef<'_, K, V>> {
        let mut acc = Vec::with_capacity(self.n_count);
        let mut stack = vec![Visit::Enter(self.root, None)];
        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Emit(index) => acc.push(NodeRef::new(&self.nodes, Some(index))),
                Visit::Enter(None, parent) if include_nulls => {
                    acc.push(NodeRef::null(&self.nodes, parent))
                }
                Visit::Enter(None, _) => (),
                Visit::Enter(Some(index), _) => {
                    let node = &self.nodes[index];
                    let left = Visit::Enter(node.left, Some(index));
                    let right = Visit::Enter(node.right, Some(index));
                    // stack pops in reverse order of push.
                    let visits = match order {
                        Order::Pre => [right, left, Visit::Emit(index)],
                        Order::In => [right, Visit::Emit(index), left],
                        Order::Post => [Visit::Emit(index), right, left],
                    };
                    stack.extend(visits.iter().copied());
                }
            }
        }
        acc
    }

    // `low` and `high` are the exclusive key bounds inherited from
    // ancestors, every key in the subtree must fall within them.
    #[allow(clippy::too_many_arguments)]
    fn validate_tree(
        &self,
        link: Link,
        parent: Link,
        (low, high): (Option<&K>, Option<&K>),
        fromred: bool,
        mut nb: usize,
        depth: usize,
        depths: &mut Depth,
        count: &mut usize,
    ) -> Result<usize, Error<K>>
    where
        K: Clone + fmt::Debug,
    {
        let index = match link {
            None => {
                depths.sample(depth);
                return Ok(nb);
            }
            Some(index) => index,
        };
        let node = &self.nodes[index];
        if node.parent != parent {
            let err = format!("node {} parent {:?} expected {:?}", index, node.parent, parent);
            return Err(Error::BrokenLink(err));
        }
        *count += 1;

        match (low, high) {
            (Some(low), _) if node.key <= *low => {
                return Err(Error::SortError(node.key.clone(), low.clone()));
            }
            (_, Some(high)) if node.key >= *high => {
                return Err(Error::SortError(node.key.clone(), high.clone()));
            }
            _ => (),
        }

        let red = node.is_red();
        if fromred && red {
            return Err(Error::ConsecutiveReds);
        }
        if !red {
            nb += 1;
        }
        let (left, right) = (node.left, node.right);
        let (lb, rb) = ((low, Some(&node.key)), (Some(&node.key), high));
        let lblacks = self.validate_tree(left, link, lb, red, nb, depth + 1, depths, count)?;
        let rblacks = self.validate_tree(right, link, rb, red, nb, depth + 1, depths, count)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }
        Ok(lblacks)
    }
}

//--------- rotation and fixup routines ----------------

impl<K, V> RbTree<K, V> {
    //              (p)                       (p)
    //               |                         |
    //               x                         y
    //              / \                       / \
    //             /   \                     /   \
    //          left    y                   x     yr
    //                 / \                 / \
    //               yl   yr           left   yl
    //
    #[cfg(test)]
    pub(crate) fn left_rotate(&mut self, x: usize) {
        self.rotate(x, Side::Left)
    }

    //              (p)                       (p)
    //               |                         |
    //               x                         y
    //              / \                       / \
    //             /   \                     /   \
    //            y    right               yl     x
    //           / \                             / \
    //         yl   yr                         yr   right
    //
    #[cfg(test)]
    pub(crate) fn right_rotate(&mut self, x: usize) {
        self.rotate(x, Side::Right)
    }

    #[cfg(test)]
    pub(crate) fn key_mut(&mut self, x: usize) -> &mut K {
        &mut self.nodes[x].key
    }

    #[cfg(test)]
    pub(crate) fn parent_mut(&mut self, x: usize) -> &mut Link {
        &mut self.nodes[x].parent
    }

    // `x` moves down towards `side`, its child on the other side takes
    // its place. Colors are left untouched.
    fn rotate(&mut self, x: usize, side: Side) {
        let y = match self.nodes[x].child(!side) {
            Some(y) => y,
            None => panic!("rotate(): rotating towards a null node ? Call the programmer"),
        };
        trace!("{}: rotate {:?} at {}", self.name, side, x);

        let inner = self.nodes[y].child(side);
        self.nodes[x].set_child(!side, inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        match parent {
            Some(parent) => {
                let side = self.side_of(x, parent);
                self.nodes[parent].set_child(side, Some(y));
            }
            None => self.root = Some(y),
        }

        self.nodes[y].set_child(side, Some(x));
        self.nodes[x].parent = Some(y);
    }

    // replace subtree at `u` with subtree at `v`, `u` keeps its links.
    fn transplant(&mut self, u: usize, v: Link) {
        let parent = self.nodes[u].parent;
        match parent {
            Some(parent) => {
                let side = self.side_of(u, parent);
                self.nodes[parent].set_child(side, v);
            }
            None => self.root = v,
        }
        if let Some(v) = v {
            self.nodes[v].parent = parent;
        }
    }

    #[inline]
    fn side_of(&self, child: usize, parent: usize) -> Side {
        if self.nodes[parent].left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    fn set_color(&mut self, link: Link, color: Color) {
        if let Some(index) = link {
            self.nodes[index].color = color
        }
    }

    fn insert_fixup(&mut self, mut k: usize) {
        while let Some(mut p) = self.nodes[k].parent {
            if self.nodes[p].is_black() {
                break;
            }
            // a red parent is never the root, grandparent exists.
            let g = match self.nodes[p].parent {
                Some(g) => g,
                None => panic!("insert_fixup(): red root ? Call the programmer"),
            };
            let parent_side = self.side_of(p, g);
            let uncle = self.nodes[g].child(!parent_side);

            if is_red(&self.nodes, uncle) {
                trace!("{}: insert fixup, red uncle", self.name);
                self.nodes[p].color = Color::Black;
                self.set_color(uncle, Color::Black);
                self.nodes[g].color = Color::Red;
                k = g;
                continue;
            }

            if self.side_of(k, p) != parent_side {
                trace!("{}: insert fixup, inner grandchild", self.name);
                k = p;
                self.rotate(k, parent_side);
                p = match self.nodes[k].parent {
                    Some(p) => p,
                    None => panic!("insert_fixup(): lost parent ? Call the programmer"),
                };
            }

            trace!("{}: insert fixup, outer grandchild", self.name);
            self.nodes[p].color = Color::Black;
            self.nodes[g].color = Color::Red;
            self.rotate(g, !parent_side);
            break;
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    fn delete_fixup(&mut self, mut x: Link, mut parent: Link) {
        while x != self.root && is_black(&self.nodes, x) {
            let p = match parent {
                Some(p) => p,
                None => panic!("delete_fixup(): orphan non-root node ? Call the programmer"),
            };
            // `x` can be null, but its sibling cannot, a black deficiency
            // under `p` implies a non-empty sibling subtree.
            let side = if self.nodes[p].left == x {
                Side::Left
            } else {
                Side::Right
            };
            let mut s = self.sibling(p, side);

            if self.nodes[s].is_red() {
                trace!("{}: delete fixup, red sibling", self.name);
                self.nodes[s].color = Color::Black;
                self.nodes[p].color = Color::Red;
                self.rotate(p, side);
                s = self.sibling(p, side);
            }

            let (near, far) = (self.nodes[s].child(side), self.nodes[s].child(!side));
            if is_black(&self.nodes, near) && is_black(&self.nodes, far) {
                trace!("{}: delete fixup, black nephews", self.name);
                self.nodes[s].color = Color::Red;
                x = Some(p);
                parent = self.nodes[p].parent;
                continue;
            }

            if is_black(&self.nodes, far) {
                trace!("{}: delete fixup, red near nephew", self.name);
                self.set_color(near, Color::Black);
                self.nodes[s].color = Color::Red;
                self.rotate(s, !side);
                s = self.sibling(p, side);
            }

            trace!("{}: delete fixup, red far nephew", self.name);
            self.nodes[s].color = self.nodes[p].color;
            self.nodes[p].color = Color::Black;
            let far = self.nodes[s].child(!side);
            self.set_color(far, Color::Black);
            self.rotate(p, side);
            x = self.root;
            parent = None;
        }

        self.set_color(x, Color::Black);
    }

    // sibling of the child at `side` under `p`.
    fn sibling(&self, p: usize, side: Side) -> usize {
        match self.nodes[p].child(!side) {
            Some(s) => s,
            None => panic!("delete_fixup(): null sibling ? Call the programmer"),
        }
    }
}

#[derive(Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

#[derive(Clone, Copy)]
enum Visit {
    Enter(Link, Link), // (node, its parent)
    Emit(usize),
}

fn is_red<K, V>(nodes: &Slab<Node<K, V>>, link: Link) -> bool {
    link.map_or(false, |index| nodes[index].is_red())
}

fn is_black<K, V>(nodes: &Slab<Node<K, V>>, link: Link) -> bool {
    link.map_or(true, |index| nodes[index].is_black())
}

// descend all the way towards `side`.
fn edge<K, V>(nodes: &Slab<Node<K, V>>, mut index: usize, side: Side) -> usize {
    while let Some(child) = nodes[index].child(side) {
        index = child;
    }
    index
}

// in-order neighbour towards `side`, successor for right and
// predecessor for left.
fn step<K, V>(nodes: &Slab<Node<K, V>>, mut index: usize, side: Side) -> Link {
    if let Some(child) = nodes[index].child(side) {
        return Some(edge(nodes, child, !side));
    }
    let mut parent = nodes[index].parent;
    while let Some(p) = parent {
        if nodes[p].child(side) != Some(index) {
            break;
        }
        index = p;
        parent = nodes[p].parent;
    }
    parent
}

/// Double ended iterator over entries of [`RbTree`], in key order.
/// Returned by [`RbTree::iter`] and [`RbTree::range`].
pub struct Iter<'a, K, V> {
    nodes: &'a Slab<Node<K, V>>,
    front: Link,
    back: Link,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.front?;
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.front = step(self.nodes, index, Side::Right);
        }
        let node = &self.nodes[index];
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.back?;
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.back = step(self.nodes, index, Side::Left);
        }
        let node = &self.nodes[index];
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> IntoIterator for &'a RbTree<K, V>
where
    K: Ord,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, Q> Index<&Q> for RbTree<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// Return the value for key. Panics if key is not present.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("RbTree::index(): key not present"),
        }
    }
}

impl<K, V, Q> IndexMut<&Q> for RbTree<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    /// Return the value for key, for in place update. Panics if key is
    /// not present, this never inserts a new entry.
    fn index_mut(&mut self, key: &Q) -> &mut V {
        match self.get_mut(key) {
            Some(value) => value,
            None => panic!("RbTree::index_mut(): key not present"),
        }
    }
}

/// Statistics on [`RbTree`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`RbTree::stats`] method.
/// * To get full statisics via [`RbTree::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`RbTree`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `RbTree<k,V>`. Although
    /// the node overhead is constant, the node size varies based on
    /// key and value types. EG:
    ///
    /// ```
    /// use rbtree_index::RbTree;
    /// let index: RbTree<u64,i128> = RbTree::new("myinstance");
    ///
    /// // size of key: 8 bytes
    /// // size of value: 16 bytes
    /// // overhead covers color and three links.
    /// assert!(index.stats().node_size() > 8 + 16);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        self.depths.clone().filter(|depths| depths.samples() > 0)
    }
}
