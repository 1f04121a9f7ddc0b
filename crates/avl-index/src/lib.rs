//! Arena-backed AVL tree used as an in-memory ordered key index.
//!
//! Nodes live in a caller-invisible `Vec` owned by the tree; every "pointer"
//! is an `Option<u32>` index into it. The parent index is the non-owning
//! back-reference used for rebalancing ascents and for predecessor/successor
//! walks.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KeyNode`] link traits |
//! [`util`] | generic walks: `first`, `next`, `prev`, `find`, `transplant` … |
//! [`avl::rotate`] | the four rotation primitives |
//! [`avl::util`] | insert / remove with rebalance-on-ascent, validation |
//! [`avl`] | [`AvlTree`], [`NodeRef`], [`Traversal`] |
//!
//! The tree is single-threaded; share it across threads only behind a lock
//! covering the whole container.

pub mod avl;
pub mod error;
pub mod types;
pub mod util;

pub use avl::{AvlTree, NodeId, NodeRef, Traversal};
pub use error::AvlError;
pub use types::{KeyNode, Node};
