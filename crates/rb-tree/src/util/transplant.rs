use crate::types::RbNodeLike;

use super::{get_l, get_p, replace_child, set_p};

/// Put `replacement` where `target` hangs in the tree.
///
/// Only the parent side is relinked: `target`'s own children and
/// `replacement`'s children are left as they are. Returns the new root.
pub fn transplant<N: RbNodeLike>(
    arena: &mut [N],
    root: Option<u32>,
    target: u32,
    replacement: Option<u32>,
) -> Option<u32> {
    let p = get_p(arena, target);
    if let Some(replacement) = replacement {
        set_p(arena, replacement, p);
    }
    match p {
        Some(p) => {
            replace_child(arena, p, target, replacement);
            root
        }
        None => replacement,
    }
}

/// Leftmost node of the subtree rooted at `node`.
pub fn minimum<N: RbNodeLike>(arena: &[N], mut node: u32) -> u32 {
    while let Some(l) = get_l(arena, node) {
        node = l;
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RbNode;

    fn chain() -> Vec<RbNode> {
        // 0(20) -> l 1(10) -> r 2(15)
        let mut arena = vec![RbNode::new(20), RbNode::new(10), RbNode::new(15)];
        arena[0].l = Some(1);
        arena[1].p = Some(0);
        arena[1].r = Some(2);
        arena[2].p = Some(1);
        arena
    }

    #[test]
    fn replaces_inner_node_with_child() {
        let mut arena = chain();
        let root = transplant(&mut arena, Some(0), 1, Some(2));
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].l, Some(2));
        assert_eq!(arena[2].p, Some(0));
        // Target keeps its own links until the caller finishes the splice.
        assert_eq!(arena[1].r, Some(2));
    }

    #[test]
    fn replacing_root_moves_root() {
        let mut arena = chain();
        let root = transplant(&mut arena, Some(0), 0, Some(1));
        assert_eq!(root, Some(1));
        assert_eq!(arena[1].p, None);
    }

    #[test]
    fn replacing_with_nothing_clears_slot() {
        let mut arena = chain();
        let root = transplant(&mut arena, Some(0), 2, None);
        assert_eq!(root, Some(0));
        assert_eq!(arena[1].r, None);
        assert_eq!(transplant(&mut arena, Some(0), 0, None), None);
    }

    #[test]
    fn minimum_follows_left_links() {
        let arena = chain();
        assert_eq!(minimum(&arena, 0), 1);
        assert_eq!(minimum(&arena, 2), 2);
    }
}
