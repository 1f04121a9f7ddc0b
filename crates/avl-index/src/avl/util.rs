use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::AvlError;
use crate::types::{KeyNode, Node};
use crate::util::{
    first, get_l, get_p, get_r, next, set_l, set_left_child, set_p, set_r, set_right_child,
    transplant,
};

use super::rotate::{rotate_left, rotate_left_right, rotate_right, rotate_right_left};
use super::types::AvlNodeLike;

/// Cached height of an optional subtree; an empty subtree has height 0.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &[N], i: Option<u32>) -> u32 {
    i.map_or(0, |i| arena[i as usize].h())
}

/// `height(left) - height(right)` from the cached child heights.
#[inline]
pub fn balance<N: AvlNodeLike>(arena: &[N], i: u32) -> i32 {
    height(arena, get_l(arena, i)) as i32 - height(arena, get_r(arena, i)) as i32
}

/// Refreshes the cached height of `i`. Children must already be correct.
#[inline]
pub fn recompute_height<N: AvlNodeLike>(arena: &mut [N], i: u32) {
    let lh = height(arena, get_l(arena, i));
    let rh = height(arena, get_r(arena, i));
    arena[i as usize].set_h(1 + lh.max(rh));
}

/// Inserts `node` unless a node with an equal key exists.
///
/// Returns the new root, or `None` when the key is already present; in that
/// case `node` is dropped and the arena is left untouched.
pub fn insert<K, N>(arena: &mut Vec<N>, root: Option<u32>, node: N) -> Option<u32>
where
    K: Ord,
    N: AvlNodeLike + KeyNode<K>,
{
    let n = u32::try_from(arena.len()).expect("arena index fits in u32");
    let Some(mut curr) = root else {
        arena.push(node);
        return Some(n);
    };

    let (parent, ord) = loop {
        let ord = node.key().cmp(arena[curr as usize].key());
        let next = match ord {
            Ordering::Equal => return None,
            Ordering::Less => get_l(arena, curr),
            Ordering::Greater => get_r(arena, curr),
        };
        match next {
            Some(next) => curr = next,
            None => break (curr, ord),
        }
    };

    arena.push(node);
    if ord == Ordering::Less {
        set_left_child(arena, parent, Some(n));
    } else {
        set_right_child(arena, parent, Some(n));
    }
    Some(rebalance_after_insert::<K, N>(arena, parent, n))
}

/// Walks from `start` to the root refreshing heights. An unbalanced node is
/// repaired by comparing the inserted key with its heavy child's key.
fn rebalance_after_insert<K, N>(arena: &mut [N], start: u32, inserted: u32) -> u32
where
    K: Ord,
    N: AvlNodeLike + KeyNode<K>,
{
    let mut curr = start;
    loop {
        recompute_height(arena, curr);
        let bf = balance(arena, curr);
        if bf > 1 {
            let l = get_l(arena, curr).expect("left-heavy node has a left child");
            curr = if arena[inserted as usize].key() < arena[l as usize].key() {
                rotate_right(arena, curr)
            } else {
                rotate_left_right(arena, curr)
            };
        } else if bf < -1 {
            let r = get_r(arena, curr).expect("right-heavy node has a right child");
            curr = if arena[inserted as usize].key() > arena[r as usize].key() {
                rotate_left(arena, curr)
            } else {
                rotate_right_left(arena, curr)
            };
        }
        match get_p(arena, curr) {
            Some(p) => curr = p,
            None => return curr,
        }
    }
}

/// Unlinks `n`, rebalances, and releases its arena slot.
///
/// Returns the new root together with the released node. The last arena slot
/// is moved into the freed position, so the index of that one node changes.
pub fn remove<N: AvlNodeLike>(arena: &mut Vec<N>, n: u32) -> (Option<u32>, N) {
    let l = get_l(arena, n);
    let r = get_r(arena, n);

    // `start` is the lowest node whose subtree shrank.
    let (start, replacement) = match (l, r) {
        (None, _) => (transplant(arena, n, r), r),
        (_, None) => (transplant(arena, n, l), l),
        (Some(l), Some(r)) => {
            let s = first(arena, Some(r)).expect("right subtree is not empty");
            let start = if s == r {
                s
            } else {
                let sp = get_p(arena, s).expect("successor below the right child has a parent");
                let sr = get_r(arena, s);
                transplant(arena, s, sr);
                set_right_child(arena, s, Some(r));
                sp
            };
            transplant(arena, n, Some(s));
            set_left_child(arena, s, Some(l));
            (Some(start), Some(s))
        }
    };

    set_p(arena, n, None);
    set_l(arena, n, None);
    set_r(arena, n, None);

    let root = match start {
        Some(start) => Some(rebalance_after_remove(arena, start)),
        // Removed the root and it had at most one child.
        None => replacement,
    };
    release(arena, root, n)
}

/// Walks from `start` to the root refreshing heights. An unbalanced node is
/// repaired by the sign of its heavy child's balance; unlike insertion the
/// walk may rotate at every level.
fn rebalance_after_remove<N: AvlNodeLike>(arena: &mut [N], start: u32) -> u32 {
    let mut curr = start;
    loop {
        recompute_height(arena, curr);
        let bf = balance(arena, curr);
        if bf > 1 {
            let l = get_l(arena, curr).expect("left-heavy node has a left child");
            curr = if balance(arena, l) >= 0 {
                rotate_right(arena, curr)
            } else {
                rotate_left_right(arena, curr)
            };
        } else if bf < -1 {
            let r = get_r(arena, curr).expect("right-heavy node has a right child");
            curr = if balance(arena, r) <= 0 {
                rotate_left(arena, curr)
            } else {
                rotate_right_left(arena, curr)
            };
        }
        match get_p(arena, curr) {
            Some(p) => curr = p,
            None => return curr,
        }
    }
}

/// Drops the detached node `n` from the arena by moving the last slot into
/// its place and repointing that node's neighbours.
fn release<N: AvlNodeLike>(arena: &mut Vec<N>, root: Option<u32>, n: u32) -> (Option<u32>, N) {
    let moved = (arena.len() - 1) as u32;
    let node = arena.swap_remove(n as usize);
    if moved == n {
        return (root, node);
    }

    if let Some(p) = get_p(arena, n) {
        if get_l(arena, p) == Some(moved) {
            set_l(arena, p, Some(n));
        } else {
            set_r(arena, p, Some(n));
        }
    }
    if let Some(l) = get_l(arena, n) {
        set_p(arena, l, Some(n));
    }
    if let Some(r) = get_r(arena, n) {
        set_p(arena, r, Some(n));
    }

    let root = if root == Some(moved) { Some(n) } else { root };
    (root, node)
}

/// Whether every node under `root` has `|balance| <= 1`, judged by real
/// subtree heights rather than the cached ones.
pub fn is_balanced<N: AvlNodeLike>(arena: &[N], root: Option<u32>) -> bool {
    fn checked_height<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> Option<u32> {
        let Some(i) = node else {
            return Some(0);
        };
        let lh = checked_height(arena, get_l(arena, i))?;
        let rh = checked_height(arena, get_r(arena, i))?;
        if lh.abs_diff(rh) > 1 {
            return None;
        }
        Some(1 + lh.max(rh))
    }

    checked_height(arena, root).is_some()
}

/// Checks parent links, cached heights, balance, and key order under `root`.
pub fn assert_avl_tree<K, N>(arena: &[N], root: Option<u32>) -> Result<(), AvlError>
where
    K: Ord,
    N: AvlNodeLike + KeyNode<K>,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err(AvlError::RootHasParent);
    }

    fn validate_links_and_heights<N: AvlNodeLike>(arena: &[N], node: u32) -> Result<u32, AvlError> {
        let mut child_heights = [0u32; 2];
        for (slot, child) in [get_l(arena, node), get_r(arena, node)].into_iter().enumerate() {
            if let Some(c) = child {
                if get_p(arena, c) != Some(node) {
                    return Err(AvlError::BrokenParentLink { node: c });
                }
                child_heights[slot] = validate_links_and_heights(arena, c)?;
            }
        }

        let [lh, rh] = child_heights;
        let expected = 1 + lh.max(rh);
        let actual = arena[node as usize].h();
        if actual != expected {
            return Err(AvlError::HeightMismatch {
                node,
                expected,
                actual,
            });
        }
        let balance = lh as i32 - rh as i32;
        if !(-1..=1).contains(&balance) {
            return Err(AvlError::Unbalanced { node, balance });
        }
        Ok(expected)
    }

    validate_links_and_heights(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if arena[prev as usize].key() >= arena[i as usize].key() {
                return Err(AvlError::OrderViolated { node: i });
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<K, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    N: AvlNodeLike + KeyNode<K>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.h(),
                n.key()
            )
        }
    }
}
