use std::fmt;

use crate::util::{first, get_l, get_p, get_r, last, next, prev};

use super::types::{AvlNode, NodeId};
use super::util::balance;

/// Read-only view of one node.
///
/// Borrows the whole tree, so a view can never outlive the next mutation.
/// This is the surface handed to printers and shape visualizers.
pub struct NodeRef<'a, K> {
    arena: &'a [AvlNode<K>],
    idx: u32,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(arena: &'a [AvlNode<K>], idx: u32) -> Self {
        Self { arena, idx }
    }

    fn at(&self, idx: Option<u32>) -> Option<NodeRef<'a, K>> {
        idx.map(|idx| NodeRef::new(self.arena, idx))
    }

    pub fn id(&self) -> NodeId {
        NodeId(self.idx)
    }

    pub fn key(&self) -> &'a K {
        &self.arena[self.idx as usize].k
    }

    pub fn height(&self) -> u32 {
        self.arena[self.idx as usize].h
    }

    /// `height(left) - height(right)`.
    pub fn balance(&self) -> i32 {
        balance(self.arena, self.idx)
    }

    pub fn has_left(&self) -> bool {
        get_l(self.arena, self.idx).is_some()
    }

    pub fn has_right(&self) -> bool {
        get_r(self.arena, self.idx).is_some()
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.at(get_l(self.arena, self.idx))
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.at(get_r(self.arena, self.idx))
    }

    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.at(get_p(self.arena, self.idx))
    }

    /// Leftmost node of this subtree.
    pub fn min(&self) -> NodeRef<'a, K> {
        let idx = first(self.arena, Some(self.idx)).unwrap_or(self.idx);
        NodeRef::new(self.arena, idx)
    }

    /// Rightmost node of this subtree.
    pub fn max(&self) -> NodeRef<'a, K> {
        let idx = last(self.arena, Some(self.idx)).unwrap_or(self.idx);
        NodeRef::new(self.arena, idx)
    }

    /// Next node in key order.
    pub fn successor(&self) -> Option<NodeRef<'a, K>> {
        self.at(next(self.arena, self.idx))
    }

    /// Previous node in key order.
    pub fn predecessor(&self) -> Option<NodeRef<'a, K>> {
        self.at(prev(self.arena, self.idx))
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.idx)
            .field("key", self.key())
            .field("height", &self.height())
            .finish()
    }
}
