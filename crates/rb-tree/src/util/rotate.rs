use log::trace;

use crate::types::RbNodeLike;

use super::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r};

/// Pivot `x` down-left and its right child up.
///
/// ```text
///     x              y
///    / \            / \
///   a   y    =>    x   c
///      / \        / \
///     b   c      a   b
/// ```
///
/// Returns the new root. Colors are left untouched.
pub fn rotate_left<N: RbNodeLike>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let y = get_r(arena, x).expect("rotate_left requires a right child");
    trace!("rotate left at {}", arena[x as usize].key());
    let p = get_p(arena, x);
    let yl = get_l(arena, y);

    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }

    set_p(arena, y, p);
    let root = match p {
        Some(p) => {
            replace_child(arena, p, x, Some(y));
            root
        }
        None => Some(y),
    };

    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Mirror of [`rotate_left`]: pivot `x` down-right and its left child up.
pub fn rotate_right<N: RbNodeLike>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let y = get_l(arena, x).expect("rotate_right requires a left child");
    trace!("rotate right at {}", arena[x as usize].key());
    let p = get_p(arena, x);
    let yr = get_r(arena, y);

    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }

    set_p(arena, y, p);
    let root = match p {
        Some(p) => {
            replace_child(arena, p, x, Some(y));
            root
        }
        None => Some(y),
    };

    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RbNode;

    /// x=0 with left a=1 and right y=2; y has left b=3, right c=4.
    fn right_heavy() -> Vec<RbNode> {
        let mut arena: Vec<RbNode> = [10, 5, 20, 15, 25].into_iter().map(RbNode::new).collect();
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[2].p = Some(0);
        arena[2].l = Some(3);
        arena[2].r = Some(4);
        arena[3].p = Some(2);
        arena[4].p = Some(2);
        arena
    }

    #[test]
    fn rotate_left_at_root_promotes_right_child() {
        let mut arena = right_heavy();
        let root = rotate_left(&mut arena, Some(0), 0);
        assert_eq!(root, Some(2));
        assert_eq!(arena[2].p, None);
        assert_eq!(arena[2].l, Some(0));
        assert_eq!(arena[2].r, Some(4));
        assert_eq!(arena[0].p, Some(2));
        assert_eq!(arena[0].l, Some(1));
        assert_eq!(arena[0].r, Some(3));
        assert_eq!(arena[3].p, Some(0));
    }

    #[test]
    fn rotate_right_undoes_rotate_left() {
        let mut arena = right_heavy();
        let before = arena.clone();
        let root = rotate_left(&mut arena, Some(0), 0);
        let root = rotate_right(&mut arena, root, 2);
        assert_eq!(root, Some(0));
        assert_eq!(arena, before);
    }

    #[test]
    fn rotation_below_root_relinks_parent() {
        let mut arena = right_heavy();
        // Rotate right at y=2 (left child 3 moves up).
        let root = rotate_right(&mut arena, Some(0), 2);
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].r, Some(3));
        assert_eq!(arena[3].p, Some(0));
        assert_eq!(arena[3].r, Some(2));
        assert_eq!(arena[2].p, Some(3));
        assert_eq!(arena[2].l, None);
    }
}
