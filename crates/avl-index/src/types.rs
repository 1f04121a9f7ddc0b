//! Node trait definitions.
//!
//! Every "pointer" in a tree is an `Option<u32>` index into a [`Vec`]-backed
//! arena. The tree-manipulation functions in [`crate::util`] and
//! [`crate::avl`] take the arena as a slice (or `&mut Vec<N>` when they
//! allocate or release) and work with indices.

/// Tree links (`p`, `l`, `r`).
///
/// `p` is a back-reference only: it never owns the parent, and every write to
/// a child slot must be paired with the matching write to the child's `p`.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A node that carries an ordered key.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
}
