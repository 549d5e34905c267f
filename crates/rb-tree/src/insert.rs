//! Insertion: BST descent to a free slot, then red-red repair.

use std::cmp::Ordering;

use log::trace;

use crate::types::{Color, Key, RbNodeLike};
use crate::util::{
    color_of, get_l, get_p, get_r, is_red, rotate_left, rotate_right, set_color, set_l, set_p,
    set_r,
};

/// Where a key belongs in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The tree is empty.
    Root,
    /// Free left child position of the given parent.
    Left(u32),
    /// Free right child position of the given parent.
    Right(u32),
    /// The key is already stored at the given node.
    Occupied(u32),
}

/// Descend from `root` to the position `key` would occupy.
pub fn locate<N: RbNodeLike>(arena: &[N], root: Option<u32>, key: Key) -> Slot {
    let Some(mut curr) = root else {
        return Slot::Root;
    };
    loop {
        match key.cmp(&arena[curr as usize].key()) {
            Ordering::Less => match get_l(arena, curr) {
                Some(l) => curr = l,
                None => return Slot::Left(curr),
            },
            Ordering::Greater => match get_r(arena, curr) {
                Some(r) => curr = r,
                None => return Slot::Right(curr),
            },
            Ordering::Equal => return Slot::Occupied(curr),
        }
    }
}

/// Link the detached node `n` into `slot` and rebalance.
///
/// `slot` must come from [`locate`] on the current tree and must not be
/// [`Slot::Occupied`]; an occupied slot leaves the tree untouched. Returns the
/// new root.
pub fn insert_at<N: RbNodeLike>(
    arena: &mut [N],
    root: Option<u32>,
    n: u32,
    slot: Slot,
) -> Option<u32> {
    let parent = match slot {
        Slot::Root => {
            set_p(arena, n, None);
            set_color(arena, Some(n), Color::Black);
            return Some(n);
        }
        Slot::Occupied(_) => return root,
        Slot::Left(p) => {
            set_l(arena, p, Some(n));
            p
        }
        Slot::Right(p) => {
            set_r(arena, p, Some(n));
            p
        }
    };
    set_p(arena, n, Some(parent));
    set_color(arena, Some(n), Color::Red);
    fix_insert(arena, root, n)
}

/// Restore the red-black properties after `z` was attached red.
fn fix_insert<N: RbNodeLike>(arena: &mut [N], mut root: Option<u32>, mut z: u32) -> Option<u32> {
    loop {
        let Some(mut p) = get_p(arena, z) else {
            break;
        };
        if !is_red(arena, Some(p)) {
            break;
        }
        // A red parent is never the root, so the grandparent exists.
        let g = get_p(arena, p).expect("red parent has a parent");
        if get_l(arena, g) == Some(p) {
            let u = get_r(arena, g);
            if is_red(arena, u) {
                trace!("insert fix-up: recolor under {}", arena[g as usize].key());
                set_color(arena, Some(g), Color::Red);
                set_color(arena, Some(p), Color::Black);
                set_color(arena, u, Color::Black);
                z = g;
                continue;
            }
            if get_r(arena, p) == Some(z) {
                root = rotate_left(arena, root, p);
                z = p;
                p = get_p(arena, z).expect("rotated node has a parent");
            }
            root = rotate_right(arena, root, g);
            swap_colors(arena, p, g);
            // `p` now tops the subtree in black.
            break;
        } else {
            let u = get_l(arena, g);
            if is_red(arena, u) {
                trace!("insert fix-up: recolor under {}", arena[g as usize].key());
                set_color(arena, Some(g), Color::Red);
                set_color(arena, Some(p), Color::Black);
                set_color(arena, u, Color::Black);
                z = g;
                continue;
            }
            if get_l(arena, p) == Some(z) {
                root = rotate_right(arena, root, p);
                z = p;
                p = get_p(arena, z).expect("rotated node has a parent");
            }
            root = rotate_left(arena, root, g);
            swap_colors(arena, p, g);
            break;
        }
    }
    set_color(arena, root, Color::Black);
    root
}

fn swap_colors<N: RbNodeLike>(arena: &mut [N], a: u32, b: u32) {
    let ca = color_of(arena, Some(a));
    let cb = color_of(arena, Some(b));
    set_color(arena, Some(a), cb);
    set_color(arena, Some(b), ca);
}
