//! Node definitions.
//!
//! Each "pointer" is an `Option<u32>` index into a [`Vec`]-backed arena
//! owned by [`RedBlackTree`](crate::RedBlackTree). Tree-manipulation
//! functions take the arena as `&mut [N]` and work with indices.

use std::fmt;

/// Key type stored in the tree.
pub type Key = i32;

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Black => "BLACK",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tree links (`p`, `l`, `r`).
///
/// `l` and `r` own their subtrees; `p` is a back index used only for upward
/// traversal.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Red-black specific node behavior.
pub trait RbNodeLike: Node {
    fn key(&self) -> Key;
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RbNode {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Key,
    pub c: Color,
}

impl RbNode {
    /// New detached node. Nodes start red.
    pub fn new(k: Key) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            c: Color::Red,
        }
    }
}

impl Node for RbNode {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl RbNodeLike for RbNode {
    fn key(&self) -> Key {
        self.k
    }

    fn color(&self) -> Color {
        self.c
    }

    fn set_color(&mut self, color: Color) {
        self.c = color;
    }
}
