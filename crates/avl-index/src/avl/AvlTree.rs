use std::fmt;

use crate::error::AvlError;
use crate::util::{find, find_or_next_higher, find_or_next_lower, first, last, size};

use super::iter::Traversal;
use super::node_ref::NodeRef;
use super::types::{AvlNode, NodeId};
use super::util::{assert_avl_tree, insert, is_balanced, print, remove};

/// Ordered set of keys kept height-balanced after every mutation.
///
/// Nodes live in one arena owned by the tree; links between them are arena
/// indices, with the parent index serving as the non-owning back-reference.
/// `insert`, `delete`, and `find` are O(log n).
///
/// ```
/// use avl_index::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for k in [10, 2, 11] {
///     tree.insert(k);
/// }
/// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![2, 10, 11]);
/// assert!(tree.is_balanced());
/// ```
#[derive(Clone)]
pub struct AvlTree<K> {
    root: Option<u32>,
    size: usize,
    arena: Vec<AvlNode<K>>,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> AvlTree<K> {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
            arena: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.root.map_or(0, |r| self.arena[r as usize].h as usize)
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.size = 0;
    }

    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.node_at(self.root)
    }

    /// View of the node behind `id`, or `None` if the slot no longer exists.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        ((id.0 as usize) < self.arena.len()).then(|| NodeRef::new(&self.arena, id.0))
    }

    fn node_at(&self, idx: Option<u32>) -> Option<NodeRef<'_, K>> {
        idx.map(|idx| NodeRef::new(&self.arena, idx))
    }

    pub fn min(&self) -> Option<NodeRef<'_, K>> {
        self.node_at(first(&self.arena, self.root))
    }

    pub fn max(&self) -> Option<NodeRef<'_, K>> {
        self.node_at(last(&self.arena, self.root))
    }

    /// In-order successor of the node behind `id`.
    pub fn lowerbound(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        self.node(id)?.successor()
    }

    /// In-order predecessor of the node behind `id`.
    pub fn upperbound(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        self.node(id)?.predecessor()
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Traversal<'_, K> {
        Traversal::in_order(&self.arena, self.root)
    }

    /// Keys with each node before its subtrees, left subtree first.
    pub fn pre_order(&self) -> Traversal<'_, K> {
        Traversal::pre_order(&self.arena, self.root)
    }

    /// Keys with each node after its subtrees, left subtree first.
    pub fn post_order(&self) -> Traversal<'_, K> {
        Traversal::post_order(&self.arena, self.root)
    }

    pub fn iter(&self) -> Traversal<'_, K> {
        self.in_order()
    }

    /// O(n) check of the AVL balance condition against real subtree heights.
    pub fn is_balanced(&self) -> bool {
        is_balanced(&self.arena, self.root)
    }
}

impl<K: Ord> AvlTree<K> {
    /// Adds `key`. Returns `false`, leaving the tree untouched, if an equal
    /// key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        match insert::<K, _>(&mut self.arena, self.root, AvlNode::new(key)) {
            Some(root) => {
                self.root = Some(root);
                self.size += 1;
                true
            }
            None => false,
        }
    }

    /// Removes `key`. Returns `false` if it was not present.
    pub fn delete(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and hands back the stored key.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let n = find(&self.arena, self.root, key)?;
        let (root, node) = remove(&mut self.arena, n);
        self.root = root;
        self.size -= 1;
        Some(node.into_key())
    }

    pub fn find(&self, key: &K) -> Option<NodeRef<'_, K>> {
        self.node_at(find(&self.arena, self.root, key))
    }

    pub fn contains(&self, key: &K) -> bool {
        find(&self.arena, self.root, key).is_some()
    }

    /// Node holding `key`, or else the one with the greatest smaller key.
    pub fn find_or_next_lower(&self, key: &K) -> Option<NodeRef<'_, K>> {
        self.node_at(find_or_next_lower(&self.arena, self.root, key))
    }

    /// Node holding `key`, or else the one with the smallest greater key.
    pub fn find_or_next_higher(&self, key: &K) -> Option<NodeRef<'_, K>> {
        self.node_at(find_or_next_higher(&self.arena, self.root, key))
    }

    /// Full structural check: parent links, cached heights, balance, key
    /// order, and the size counter.
    pub fn assert_valid(&self) -> Result<(), AvlError> {
        assert_avl_tree::<K, _>(&self.arena, self.root)?;
        let reachable = size(&self.arena, self.root);
        if reachable != self.size || self.size != self.arena.len() {
            return Err(AvlError::SizeMismatch {
                counter: self.size,
                reachable,
                allocated: self.arena.len(),
            });
        }
        Ok(())
    }
}

impl<K: fmt::Debug> AvlTree<K> {
    /// Indented dump of the structure with cached heights.
    pub fn print(&self) -> String {
        print::<K, _>(&self.arena, self.root, "")
    }
}

/// Keys in ascending order separated by single spaces.
impl<K: fmt::Display> fmt::Display for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.in_order().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Traversal<'a, K>;

    fn into_iter(self) -> Traversal<'a, K> {
        self.in_order()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_compacts_arena_and_keeps_links() {
        let mut tree: AvlTree<i32> = (0..32).collect();
        for k in (0..32).step_by(2) {
            assert!(tree.delete(&k));
            tree.assert_valid().unwrap();
            assert_eq!(tree.arena.len(), tree.size());
        }
        let odd: Vec<i32> = (1..32).step_by(2).collect();
        assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), odd);
    }

    #[test]
    fn insert_takes_next_arena_slot() {
        let mut tree = AvlTree::new();
        for (slot, k) in [50, 20, 80, 10, 30].into_iter().enumerate() {
            assert!(tree.insert(k));
            assert_eq!(tree.find(&k).unwrap().id().index() as usize, slot);
        }
        assert!(!tree.insert(20));
        assert_eq!(tree.arena.len(), 5);
    }

    #[test]
    fn stale_id_past_the_arena_is_rejected() {
        let mut tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();
        let id = tree.max().unwrap().id();
        tree.clear();
        assert!(tree.node(id).is_none());
        assert!(tree.lowerbound(id).is_none());
    }

    #[test]
    fn print_shows_heights() {
        let tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();
        let dump = tree.print();
        assert!(dump.starts_with("Node["));
        assert!(dump.contains("[h=2] { 2 }"));
        assert!(dump.contains("[h=1] { 1 }"));
    }
}
