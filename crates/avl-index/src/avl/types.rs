use crate::types::{KeyNode, Node};

/// Arena slot of an [`AvlTree`](super::AvlTree).
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub(crate) p: Option<u32>,
    pub(crate) l: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) k: K,
    /// Height of the subtree rooted here; a leaf has height 1.
    pub(crate) h: u32,
}

impl<K> AvlNode<K> {
    /// Detached leaf holding `k`.
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            h: 1,
        }
    }

    pub(crate) fn into_key(self) -> K {
        self.k
    }
}

impl<K> Node for AvlNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode<K> for AvlNode<K> {
    fn key(&self) -> &K {
        &self.k
    }
}

/// AVL-specific node behavior: a cached subtree height.
pub trait AvlNodeLike: Node {
    fn h(&self) -> u32;
    fn set_h(&mut self, h: u32);
}

impl<K> AvlNodeLike for AvlNode<K> {
    fn h(&self) -> u32 {
        self.h
    }

    fn set_h(&mut self, h: u32) {
        self.h = h;
    }
}

/// Stable handle to a node, valid until the next mutation of its tree.
///
/// Deleting any key compacts the arena and may renumber one other node, so a
/// `NodeId` must be re-obtained after `insert`, `delete`, or `clear`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> u32 {
        self.0
    }
}
