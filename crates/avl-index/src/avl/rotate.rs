//! The four rotation primitives.
//!
//! Each takes the root `x` of an unbalanced subtree, restructures it in O(1),
//! and returns the new subtree root. The grandparent's child slot and every
//! affected parent link are rewritten together with the child links, so the
//! caller only has to check whether the returned node became the tree root.

use crate::util::{get_l, get_r, set_left_child, set_right_child, transplant};

use super::types::AvlNodeLike;
use super::util::recompute_height;

/// Promotes the left child of `x`.
///
/// ```text
///       x          y
///      / \        / \
///     y   c  =>  a   x
///    / \            / \
///   a   z          z   c
/// ```
pub fn rotate_right<N: AvlNodeLike>(arena: &mut [N], x: u32) -> u32 {
    let y = get_l(arena, x).expect("right rotation needs a left child");
    let z = get_r(arena, y);

    transplant(arena, x, Some(y));
    set_left_child(arena, x, z);
    set_right_child(arena, y, Some(x));

    recompute_height(arena, x);
    recompute_height(arena, y);
    y
}

/// Promotes the right child of `x`.
///
/// ```text
///     x              y
///    / \            / \
///   a   y    =>    x   c
///      / \        / \
///     z   c      a   z
/// ```
pub fn rotate_left<N: AvlNodeLike>(arena: &mut [N], x: u32) -> u32 {
    let y = get_r(arena, x).expect("left rotation needs a right child");
    let z = get_l(arena, y);

    transplant(arena, x, Some(y));
    set_right_child(arena, x, z);
    set_left_child(arena, y, Some(x));

    recompute_height(arena, x);
    recompute_height(arena, y);
    y
}

/// Left-rotates the left child of `x` in place, then right-rotates `x`.
pub fn rotate_left_right<N: AvlNodeLike>(arena: &mut [N], x: u32) -> u32 {
    let l = get_l(arena, x).expect("left-right rotation needs a left child");
    rotate_left(arena, l);
    rotate_right(arena, x)
}

/// Right-rotates the right child of `x` in place, then left-rotates `x`.
pub fn rotate_right_left<N: AvlNodeLike>(arena: &mut [N], x: u32) -> u32 {
    let r = get_r(arena, x).expect("right-left rotation needs a right child");
    rotate_right(arena, r);
    rotate_left(arena, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::AvlNode;
    use crate::types::Node;

    /// Links `arena[child]` under `arena[parent]` and fixes heights bottom-up.
    fn arena(keys: &[i32], links: &[(u32, u32, bool)]) -> Vec<AvlNode<i32>> {
        let mut arena: Vec<AvlNode<i32>> = keys.iter().map(|&k| AvlNode::new(k)).collect();
        for &(parent, child, left) in links {
            if left {
                set_left_child(&mut arena, parent, Some(child));
            } else {
                set_right_child(&mut arena, parent, Some(child));
            }
        }
        for &(parent, _, _) in links.iter().rev() {
            recompute_height(&mut arena, parent);
        }
        arena
    }

    fn keys_of(arena: &[AvlNode<i32>], idx: Option<u32>) -> Option<i32> {
        idx.map(|i| arena[i as usize].k)
    }

    #[test]
    fn right_rotation_promotes_left_child() {
        // 30 <- 20 <- 10
        let mut a = arena(&[30, 20, 10], &[(0, 1, true), (1, 2, true)]);
        let top = rotate_right(&mut a, 0);

        assert_eq!(a[top as usize].k, 20);
        assert_eq!(a[top as usize].p(), None);
        assert_eq!(keys_of(&a, a[top as usize].l()), Some(10));
        assert_eq!(keys_of(&a, a[top as usize].r()), Some(30));
        assert_eq!(a[0].p(), Some(top));
        assert_eq!(a[2].p(), Some(top));
        assert_eq!(a[top as usize].h, 2);
        assert_eq!(a[0].h, 1);
    }

    #[test]
    fn left_rotation_moves_inner_subtree() {
        // 10 -> 20 -> 30, with 15 hanging left of 20
        let mut a = arena(&[10, 20, 30, 15], &[(0, 1, false), (1, 2, false), (1, 3, true)]);
        let top = rotate_left(&mut a, 0);

        assert_eq!(a[top as usize].k, 20);
        assert_eq!(a[0].r(), Some(3));
        assert_eq!(a[3].p(), Some(0));
        assert_eq!(a[0].h, 2);
        assert_eq!(a[top as usize].h, 3);
    }

    #[test]
    fn rotation_rewires_grandparent_slot() {
        // 50 with right chain 60 -> 70 -> 80
        let mut a = arena(
            &[50, 60, 70, 80],
            &[(0, 1, false), (1, 2, false), (2, 3, false)],
        );
        let top = rotate_left(&mut a, 1);

        assert_eq!(a[top as usize].k, 70);
        assert_eq!(a[0].r(), Some(top));
        assert_eq!(a[top as usize].p(), Some(0));
    }

    #[test]
    fn double_rotations() {
        // 30 <- 10 -> 20
        let mut a = arena(&[30, 10, 20], &[(0, 1, true), (1, 2, false)]);
        let top = rotate_left_right(&mut a, 0);
        assert_eq!(a[top as usize].k, 20);
        assert_eq!(keys_of(&a, a[top as usize].l()), Some(10));
        assert_eq!(keys_of(&a, a[top as usize].r()), Some(30));
        assert_eq!(a[top as usize].h, 2);

        // 10 -> 30 <- 20
        let mut a = arena(&[10, 30, 20], &[(0, 1, false), (1, 2, true)]);
        let top = rotate_right_left(&mut a, 0);
        assert_eq!(a[top as usize].k, 20);
        assert_eq!(keys_of(&a, a[top as usize].l()), Some(10));
        assert_eq!(keys_of(&a, a[top as usize].r()), Some(30));
        assert_eq!(a[1].p(), Some(top));
    }
}
