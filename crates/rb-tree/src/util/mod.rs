//! Arena link helpers shared by the insertion and deletion paths.
//!
//! - `rotate.rs` -> [`rotate_left`], [`rotate_right`]
//! - `transplant.rs` -> [`transplant`], [`minimum`]
//! - `print.rs` -> [`print_tree`]
//! - this module -> link accessors, `first` / `next` / `find` / `size`
//!
//! Absent children are black: [`color_of`] reads `None` as [`Color::Black`]
//! and [`set_color`] ignores writes to `None`.

pub mod print;
pub mod rotate;
pub mod transplant;

use std::cmp::Ordering;

use crate::types::{Color, Key, RbNodeLike};

pub use print::print_tree;
pub use rotate::{rotate_left, rotate_right};
pub use transplant::{minimum, transplant};

#[inline]
pub(crate) fn get_p<N: RbNodeLike>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: RbNodeLike>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: RbNodeLike>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: RbNodeLike>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: RbNodeLike>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: RbNodeLike>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Color of a possibly absent node.
#[inline]
pub fn color_of<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> Color {
    match node {
        Some(i) => arena[i as usize].color(),
        None => Color::Black,
    }
}

/// Recolor a possibly absent node; a no-op for `None`.
#[inline]
pub fn set_color<N: RbNodeLike>(arena: &mut [N], node: Option<u32>, color: Color) {
    if let Some(i) = node {
        arena[i as usize].set_color(color);
    }
}

#[inline]
pub(crate) fn is_red<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> bool {
    color_of(arena, node) == Color::Red
}

/// Point whichever child link of `parent` held `old` at `new`.
pub(crate) fn replace_child<N: RbNodeLike>(
    arena: &mut [N],
    parent: u32,
    old: u32,
    new: Option<u32>,
) {
    if get_l(arena, parent) == Some(old) {
        set_l(arena, parent, new);
    } else {
        set_r(arena, parent, new);
    }
}

/// Leftmost node of the tree.
pub fn first<N: RbNodeLike>(arena: &[N], root: Option<u32>) -> Option<u32> {
    root.map(|r| minimum(arena, r))
}

/// In-order successor.
pub fn next<N: RbNodeLike>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return Some(minimum(arena, r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
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

/// Exact-key lookup by BST descent.
pub fn find<N: RbNodeLike>(arena: &[N], root: Option<u32>, key: Key) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(&arena[i as usize].key()) {
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Number of nodes reachable from `root`.
pub fn size<N: RbNodeLike>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        count += 1;
        curr = next(arena, i);
    }
    count
}
