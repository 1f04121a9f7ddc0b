use std::iter::FusedIterator;

use crate::util::{first, first_post, next, next_post, next_pre};

use super::types::AvlNode;

type Step<K> = fn(&[AvlNode<K>], u32) -> Option<u32>;

/// Lazy key sequence in one of the three depth-first orders.
///
/// Walks parent links, so it needs no stack and yields exactly `size` keys.
pub struct Traversal<'a, K> {
    arena: &'a [AvlNode<K>],
    curr: Option<u32>,
    step: Step<K>,
    remaining: usize,
}

impl<'a, K> Traversal<'a, K> {
    pub(crate) fn in_order(arena: &'a [AvlNode<K>], root: Option<u32>) -> Self {
        Self {
            arena,
            curr: first(arena, root),
            step: next::<AvlNode<K>>,
            remaining: arena.len(),
        }
    }

    pub(crate) fn pre_order(arena: &'a [AvlNode<K>], root: Option<u32>) -> Self {
        Self {
            arena,
            curr: root,
            step: next_pre::<AvlNode<K>>,
            remaining: arena.len(),
        }
    }

    pub(crate) fn post_order(arena: &'a [AvlNode<K>], root: Option<u32>) -> Self {
        Self {
            arena,
            curr: first_post(arena, root),
            step: next_post::<AvlNode<K>>,
            remaining: arena.len(),
        }
    }
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let idx = self.curr?;
        self.curr = (self.step)(self.arena, idx);
        self.remaining -= 1;
        Some(&self.arena[idx as usize].k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Traversal<'_, K> {}

impl<K> FusedIterator for Traversal<'_, K> {}
