//! Nested, serializable copy of a tree's structure.

use avl_index::NodeRef;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shape<K> {
    pub key: K,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<Shape<K>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<Shape<K>>>,
}

impl<K: Clone> Shape<K> {
    /// Copies the subtree under `node` through its read-only view.
    pub fn of(node: NodeRef<'_, K>) -> Self {
        Self {
            key: node.key().clone(),
            height: node.height(),
            left: node.left().map(|l| Box::new(Self::of(l))),
            right: node.right().map(|r| Box::new(Self::of(r))),
        }
    }
}
