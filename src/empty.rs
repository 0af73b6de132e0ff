/// Can be used while indexing keys without values, like ``RbTree<K, Empty>``.
/// Use [`RbTree::insert_key`] to add entries without supplying a value.
///
/// [`RbTree::insert_key`]: crate::RbTree::insert_key
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Empty {}
