//! Renderings of [`RbTree`] for humans: an indented text tree through
//! `Display`, and a PlantUML mind-map through [`RbTree::to_mindmap`].
//! Both are built on the public node views and traversals only.

use std::fmt;

use crate::{NodeRef, RbTree};

#[derive(Clone, Copy)]
enum Branch {
    Root,
    Left,
    Right,
}

/// Indented text tree, one node per line as `KEY(COLOR)`, left child
/// before right child. Null nodes are not printed.
///
/// ```
/// use rbtree_index::RbTree;
///
/// let mut index: RbTree<i64, i64> = RbTree::new("example");
/// index.insert(1, 10);
/// index.insert(2, 20);
/// index.insert(3, 30);
/// assert_eq!(
///     index.to_string(),
///     "2(BLACK)\n     L----   1(RED)\n     R----  3(RED)\n",
/// );
/// ```
impl<K, V> fmt::Display for RbTree<K, V>
where
    K: Ord + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_subtree(f, self.root(), "", Branch::Root)
    }
}

fn write_subtree<K, V>(
    f: &mut fmt::Formatter,
    node: NodeRef<'_, K, V>,
    indent: &str,
    branch: Branch,
) -> fmt::Result
where
    K: fmt::Display,
{
    let key = match node.key() {
        Some(key) => key,
        None => return Ok(()),
    };

    f.write_str(indent)?;
    let mut indent = indent.to_string();
    match branch {
        Branch::Root => indent.push_str("     "),
        Branch::Left => {
            f.write_str("L----   ")?;
            indent.push_str("|    ");
        }
        Branch::Right => {
            f.write_str("R----  ")?;
            indent.push_str("     ");
        }
    }
    writeln!(f, "{}({})", key, node.color())?;

    write_subtree(f, node.left(), &indent, Branch::Left)?;
    write_subtree(f, node.right(), &indent, Branch::Right)
}

impl<K, V> RbTree<K, V>
where
    K: Ord + fmt::Display,
{
    /// Export the tree as a PlantUML mind-map, nodes in pre-order with
    /// null nodes included at their depth. Black and null nodes are
    /// drawn white, red nodes red.
    pub fn to_mindmap(&self) -> String {
        let mut output = "@startmindmap\n".to_string();
        for node in self.preorder(true) {
            let key = node.key().map(|key| key.to_string()).unwrap_or_default();
            let color = if node.is_black() { "white" } else { "red" };
            output.push_str(&"-".repeat(node.depth() + 1));
            output.push_str(&format!(
                "[#{}] <latex>\\rotatebox{{-90}}{{{}}}</latex>\n",
                color, key
            ));
        }
        output + "@endmindmap"
    }
}
