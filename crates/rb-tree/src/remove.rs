//! Deletion: splice the node out, then resolve a possible double black.

use log::trace;

use crate::types::{Color, RbNodeLike};
use crate::util::{
    color_of, get_l, get_p, get_r, is_red, minimum, rotate_left, rotate_right, set_color, set_l,
    set_p, set_r, transplant,
};

/// Unlink node `z` from the tree rooted at `root` and rebalance.
///
/// On return `z` is detached (all three links cleared) and no node in the
/// tree refers to it. Returns the new root.
pub fn remove<N: RbNodeLike>(arena: &mut [N], mut root: Option<u32>, z: u32) -> Option<u32> {
    let zl = get_l(arena, z);
    let zr = get_r(arena, z);
    let mut removed_color = color_of(arena, Some(z));
    // `x` moves into the vacated position; it may be absent, so its parent is
    // tracked separately.
    let x: Option<u32>;
    let x_parent: Option<u32>;

    match (zl, zr) {
        (None, _) => {
            x = zr;
            x_parent = get_p(arena, z);
            root = transplant(arena, root, z, zr);
        }
        (Some(_), None) => {
            x = zl;
            x_parent = get_p(arena, z);
            root = transplant(arena, root, z, zl);
        }
        (Some(zl), Some(zr)) => {
            let y = minimum(arena, zr);
            removed_color = color_of(arena, Some(y));
            x = get_r(arena, y);
            if get_p(arena, y) == Some(z) {
                // Successor is z's right child: it keeps its right subtree.
                if let Some(x) = x {
                    set_p(arena, x, Some(y));
                }
                x_parent = Some(y);
            } else {
                x_parent = get_p(arena, y);
                root = transplant(arena, root, y, x);
                set_r(arena, y, Some(zr));
                set_p(arena, zr, Some(y));
            }
            root = transplant(arena, root, z, Some(y));
            set_l(arena, y, Some(zl));
            set_p(arena, zl, Some(y));
            let z_color = color_of(arena, Some(z));
            set_color(arena, Some(y), z_color);
        }
    }

    set_p(arena, z, None);
    set_l(arena, z, None);
    set_r(arena, z, None);

    if removed_color == Color::Black {
        root = fix_remove(arena, root, x, x_parent);
    }
    root
}

/// Push the extra black carried by the position `x` (child of `parent`) up
/// the tree until it can be absorbed.
fn fix_remove<N: RbNodeLike>(
    arena: &mut [N],
    mut root: Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) -> Option<u32> {
    while x != root && !is_red(arena, x) {
        let p = parent.expect("non-root position has a parent");
        if get_l(arena, p) == x {
            let mut s = get_r(arena, p).expect("double black position has a sibling");
            if is_red(arena, Some(s)) {
                trace!("remove fix-up: red sibling {}", arena[s as usize].key());
                set_color(arena, Some(s), Color::Black);
                set_color(arena, Some(p), Color::Red);
                root = rotate_left(arena, root, p);
                s = get_r(arena, p).expect("sibling after rotation");
            }
            if !is_red(arena, get_l(arena, s)) && !is_red(arena, get_r(arena, s)) {
                set_color(arena, Some(s), Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
            } else {
                if !is_red(arena, get_r(arena, s)) {
                    let sl = get_l(arena, s);
                    set_color(arena, sl, Color::Black);
                    set_color(arena, Some(s), Color::Red);
                    root = rotate_right(arena, root, s);
                    s = get_r(arena, p).expect("sibling after rotation");
                }
                let p_color = color_of(arena, Some(p));
                set_color(arena, Some(s), p_color);
                set_color(arena, Some(p), Color::Black);
                let sr = get_r(arena, s);
                set_color(arena, sr, Color::Black);
                root = rotate_left(arena, root, p);
                x = root;
            }
        } else {
            let mut s = get_l(arena, p).expect("double black position has a sibling");
            if is_red(arena, Some(s)) {
                trace!("remove fix-up: red sibling {}", arena[s as usize].key());
                set_color(arena, Some(s), Color::Black);
                set_color(arena, Some(p), Color::Red);
                root = rotate_right(arena, root, p);
                s = get_l(arena, p).expect("sibling after rotation");
            }
            if !is_red(arena, get_l(arena, s)) && !is_red(arena, get_r(arena, s)) {
                set_color(arena, Some(s), Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
            } else {
                if !is_red(arena, get_l(arena, s)) {
                    let sr = get_r(arena, s);
                    set_color(arena, sr, Color::Black);
                    set_color(arena, Some(s), Color::Red);
                    root = rotate_left(arena, root, s);
                    s = get_l(arena, p).expect("sibling after rotation");
                }
                let p_color = color_of(arena, Some(p));
                set_color(arena, Some(s), p_color);
                set_color(arena, Some(p), Color::Black);
                let sl = get_l(arena, s);
                set_color(arena, sl, Color::Black);
                root = rotate_right(arena, root, p);
                x = root;
            }
        }
    }
    set_color(arena, x, Color::Black);
    root
}
