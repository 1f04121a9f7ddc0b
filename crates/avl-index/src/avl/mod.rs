//! AVL tree: node layout, rotation primitives, the mutation engine, and the
//! [`AvlTree`] container on top of them.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod iter;
pub mod node_ref;
pub mod rotate;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use iter::Traversal;
pub use node_ref::NodeRef;
pub use types::{AvlNode, AvlNodeLike, NodeId};
