//! Invariant violations reported by [`AvlTree::assert_valid`](crate::AvlTree::assert_valid).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvlError {
    #[error("Root has parent")]
    RootHasParent,
    #[error("Broken parent link on node {node}")]
    BrokenParentLink { node: u32 },
    #[error("Height mismatch on node {node}: expected {expected}, got {actual}")]
    HeightMismatch { node: u32, expected: u32, actual: u32 },
    #[error("AVL balance violated on node {node}: balance {balance}")]
    Unbalanced { node: u32, balance: i32 },
    #[error("Node order violated at node {node}")]
    OrderViolated { node: u32 },
    #[error("Size mismatch: counter {counter}, reachable {reachable}, allocated {allocated}")]
    SizeMismatch {
        counter: usize,
        reachable: usize,
        allocated: usize,
    },
}
