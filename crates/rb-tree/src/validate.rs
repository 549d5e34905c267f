//! Structural checker for red-black trees.

use thiserror::Error;

use crate::types::{Key, RbNodeLike};
use crate::util::{first, get_l, get_p, get_r, is_red, next};

/// A broken red-black or BST property, with the key of the offending node.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root {0} has a parent")]
    RootHasParent(Key),
    #[error("root {0} is not black")]
    RootNotBlack(Key),
    #[error("broken parent link below {0}")]
    BrokenParentLink(Key),
    #[error("red node {0} has a red child")]
    RedRed(Key),
    #[error("black height mismatch under {key}: left {left}, right {right}")]
    BlackHeightMismatch { key: Key, left: usize, right: usize },
    #[error("keys out of order: {prev} before {next}")]
    OrderViolated { prev: Key, next: Key },
    #[error("tree holds {actual} nodes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Check every red-black invariant of the tree rooted at `root`.
///
/// Returns the number of nodes on success.
pub fn assert_red_black_tree<N: RbNodeLike>(
    arena: &[N],
    root: Option<u32>,
) -> Result<usize, InvariantError> {
    let Some(root) = root else {
        return Ok(0);
    };

    let root_key = arena[root as usize].key();
    if get_p(arena, root).is_some() {
        return Err(InvariantError::RootHasParent(root_key));
    }
    if is_red(arena, Some(root)) {
        return Err(InvariantError::RootNotBlack(root_key));
    }

    black_height(arena, Some(root))?;

    let mut count = 0;
    let mut prev: Option<Key> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        let key = arena[i as usize].key();
        if let Some(prev) = prev {
            if prev >= key {
                return Err(InvariantError::OrderViolated { prev, next: key });
            }
        }
        prev = Some(key);
        count += 1;
        curr = next(arena, i);
    }

    Ok(count)
}

/// Black nodes on every path from `node` down to a null leaf, `node` included.
fn black_height<N: RbNodeLike>(arena: &[N], node: Option<u32>) -> Result<usize, InvariantError> {
    let Some(node) = node else {
        return Ok(0);
    };
    let key = arena[node as usize].key();
    let l = get_l(arena, node);
    let r = get_r(arena, node);

    for child in [l, r].into_iter().flatten() {
        if get_p(arena, child) != Some(node) {
            return Err(InvariantError::BrokenParentLink(key));
        }
    }

    let red = is_red(arena, Some(node));
    if red && (is_red(arena, l) || is_red(arena, r)) {
        return Err(InvariantError::RedRed(key));
    }

    let left = black_height(arena, l)?;
    let right = black_height(arena, r)?;
    if left != right {
        return Err(InvariantError::BlackHeightMismatch { key, left, right });
    }

    Ok(left + usize::from(!red))
}
