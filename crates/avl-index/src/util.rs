//! Generic arena tree walks.
//!
//! Everything here works on any [`Node`] layout and never looks at balance
//! bookkeeping, so the functions are shared by the AVL engine, the node view,
//! and the traversal iterators.
//!
//! - [`first`] / [`last`] / [`next`] / [`prev`]: in-order walk
//! - [`next_pre`], [`first_post`] / [`next_post`]: pre- and post-order walks
//! - [`find`], [`find_or_next_lower`], [`find_or_next_higher`]: key descent
//! - [`transplant`]: replace a subtree in its parent's child slot

use std::cmp::Ordering;

use crate::types::{KeyNode, Node};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Makes `child` the left subtree of `parent`, linking the child back.
pub fn set_left_child<N: Node>(arena: &mut [N], parent: u32, child: Option<u32>) {
    set_l(arena, parent, child);
    if let Some(child) = child {
        set_p(arena, child, Some(parent));
    }
}

/// Makes `child` the right subtree of `parent`, linking the child back.
pub fn set_right_child<N: Node>(arena: &mut [N], parent: u32, child: Option<u32>) {
    set_r(arena, parent, child);
    if let Some(child) = child {
        set_p(arena, child, Some(parent));
    }
}

/// Puts `new` into the child slot of `old`'s parent and points `new` back at
/// that parent.
///
/// Returns the parent, or `None` when `old` was the root (the caller then
/// owns the root update). `old` keeps its own links.
pub fn transplant<N: Node>(arena: &mut [N], old: u32, new: Option<u32>) -> Option<u32> {
    let p = get_p(arena, old);
    if let Some(p) = p {
        if get_l(arena, p) == Some(old) {
            set_l(arena, p, new);
        } else {
            set_r(arena, p, new);
        }
    }
    if let Some(new) = new {
        set_p(arena, new, p);
    }
    p
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Pre-order successor. The pre-order walk starts at the root itself.
pub fn next_pre<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return Some(l);
    }
    if let Some(r) = get_r(arena, curr) {
        return Some(r);
    }
    while let Some(p) = get_p(arena, curr) {
        if get_l(arena, p) == Some(curr) {
            if let Some(r) = get_r(arena, p) {
                return Some(r);
            }
        }
        curr = p;
    }
    None
}

/// First node of a post-order walk: the deepest node reached by preferring
/// left children over right ones.
pub fn first_post<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    loop {
        match (get_l(arena, curr), get_r(arena, curr)) {
            (Some(l), _) => curr = l,
            (None, Some(r)) => curr = r,
            (None, None) => return Some(curr),
        }
    }
}

/// Post-order successor.
pub fn next_post<N: Node>(arena: &[N], curr: u32) -> Option<u32> {
    let p = get_p(arena, curr)?;
    if get_l(arena, p) == Some(curr) {
        if let Some(r) = get_r(arena, p) {
            return first_post(arena, Some(r));
        }
    }
    Some(p)
}

/// Number of nodes in the subtree rooted at `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    count
}

/// Finds a node by key.
pub fn find<K, N>(arena: &[N], root: Option<u32>, key: &K) -> Option<u32>
where
    K: Ord,
    N: KeyNode<K>,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(arena[i as usize].key()) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Finds node by key, or the next lower node if the exact key does not exist.
pub fn find_or_next_lower<K, N>(arena: &[N], root: Option<u32>, key: &K) -> Option<u32>
where
    K: Ord,
    N: KeyNode<K>,
{
    let mut curr = root;
    let mut result = None;
    while let Some(i) = curr {
        match arena[i as usize].key().cmp(key) {
            Ordering::Equal => return Some(i),
            Ordering::Greater => curr = get_l(arena, i),
            Ordering::Less => {
                result = Some(i);
                curr = get_r(arena, i);
            }
        }
    }
    result
}

/// Finds node by key, or the next higher node if the exact key does not exist.
pub fn find_or_next_higher<K, N>(arena: &[N], root: Option<u32>, key: &K) -> Option<u32>
where
    K: Ord,
    N: KeyNode<K>,
{
    let mut curr = root;
    let mut result = None;
    while let Some(i) = curr {
        match arena[i as usize].key().cmp(key) {
            Ordering::Equal => return Some(i),
            Ordering::Less => curr = get_r(arena, i),
            Ordering::Greater => {
                result = Some(i);
                curr = get_l(arena, i);
            }
        }
    }
    result
}
