use log::debug;

use crate::insert::{insert_at, locate, Slot};
use crate::remove::remove;
use crate::types::{Key, RbNode};
use crate::util::{self, find};
use crate::validate::{assert_red_black_tree, InvariantError};

/// Red-black tree of unique integer keys.
///
/// Nodes live in an arena and link to each other by index. Slots freed by
/// [`delete`](Self::delete) are recycled by later inserts.
#[derive(Clone, Debug, Default)]
pub struct RedBlackTree {
    arena: Vec<RbNode>,
    root: Option<u32>,
    free: Vec<u32>,
    len: usize,
}

impl RedBlackTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`. Inserting a key that is already present does nothing.
    pub fn insert(&mut self, key: Key) {
        let slot = locate(&self.arena, self.root, key);
        if let Slot::Occupied(_) = slot {
            debug!("insert({key}): duplicate ignored");
            return;
        }
        let n = self.alloc(key);
        self.root = insert_at(&mut self.arena, self.root, n, slot);
        self.len += 1;
    }

    /// Remove `key`. Removing an absent key does nothing.
    pub fn delete(&mut self, key: Key) {
        let Some(z) = find(&self.arena, self.root, key) else {
            debug!("delete({key}): not found");
            return;
        };
        self.root = remove(&mut self.arena, self.root, z);
        self.free.push(z);
        self.len -= 1;
    }

    pub fn search(&self, key: Key) -> Option<&RbNode> {
        find(&self.arena, self.root, key).map(|i| &self.arena[i as usize])
    }

    pub fn contains(&self, key: Key) -> bool {
        self.search(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&RbNode> {
        self.root.map(|i| &self.arena[i as usize])
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    /// Live node stored at arena slot `idx`; `None` for retired or unknown
    /// slots.
    pub fn node(&self, idx: u32) -> Option<&RbNode> {
        self.arena
            .get(idx as usize)
            .filter(|n| n.p.is_some() || self.root == Some(idx))
    }

    pub fn left(&self, node: &RbNode) -> Option<&RbNode> {
        node.l.map(|i| &self.arena[i as usize])
    }

    pub fn right(&self, node: &RbNode) -> Option<&RbNode> {
        node.r.map(|i| &self.arena[i as usize])
    }

    pub fn parent(&self, node: &RbNode) -> Option<&RbNode> {
        node.p.map(|i| &self.arena[i as usize])
    }

    /// Number of arena slots ever allocated, live or retired.
    pub fn capacity(&self) -> usize {
        self.arena.len()
    }

    /// Structural dump, see [`util::print_tree`].
    pub fn print_tree(&self) -> String {
        util::print_tree(&self.arena, self.root)
    }

    /// Check all red-black invariants and the node count.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        let actual = assert_red_black_tree(&self.arena, self.root)?;
        if actual != self.len {
            return Err(InvariantError::LengthMismatch {
                expected: self.len,
                actual,
            });
        }
        Ok(())
    }

    fn alloc(&mut self, key: Key) -> u32 {
        match self.free.pop() {
            Some(i) => {
                debug!("insert({key}): reusing slot {i}");
                self.arena[i as usize] = RbNode::new(key);
                i
            }
            None => {
                self.arena.push(RbNode::new(key));
                (self.arena.len() - 1) as u32
            }
        }
    }
}
