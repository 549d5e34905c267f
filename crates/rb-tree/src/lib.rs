//! Arena-based red-black tree of unique `i32` keys.
//!
//! Nodes are stored in a `Vec` owned by [`RedBlackTree`]; every link is an
//! `Option<u32>` index into that arena. The parent link is a plain back
//! index and never owns anything.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`RbNode`], [`Color`], [`Node`] / [`RbNodeLike`] traits |
//! [`util`] | link helpers, rotations, transplant, `print_tree` |
//! [`insert`] | slot lookup and insertion fix-up |
//! [`remove`] | successor splice and double-black fix-up |
//! [`validate`] | invariant checker, [`InvariantError`] |
//! [`tree`] | [`RedBlackTree`] |
//! [`cli`] | menu shell used by the `rbtree` binary |

pub mod cli;
pub mod insert;
pub mod remove;
pub mod tree;
pub mod types;
pub mod util;
pub mod validate;

pub use tree::RedBlackTree;
pub use types::{Color, Key, Node, RbNode, RbNodeLike};
pub use validate::{assert_red_black_tree, InvariantError};
