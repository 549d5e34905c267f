use rb_tree::{Color, Key, RbNode, RedBlackTree};

fn in_order(tree: &RedBlackTree) -> Vec<Key> {
    fn walk(tree: &RedBlackTree, node: Option<&RbNode>, out: &mut Vec<Key>) {
        if let Some(n) = node {
            walk(tree, tree.left(n), out);
            out.push(n.k);
            walk(tree, tree.right(n), out);
        }
    }
    let mut out = Vec::new();
    walk(tree, tree.root(), &mut out);
    out
}

fn insert_value(tree: &mut RedBlackTree, value: Key) {
    tree.insert(value);
    if let Err(err) = tree.assert_valid() {
        panic!("invalid red-black tree after insert({value}): {err}");
    }
}

fn delete_value(tree: &mut RedBlackTree, value: Key) {
    tree.delete(value);
    if let Err(err) = tree.assert_valid() {
        panic!("invalid red-black tree after delete({value}): {err}");
    }
}

#[test]
fn rb_tree_right_right_insert_rotates_left_matrix() {
    let mut tree = RedBlackTree::new();
    for value in [10, 20, 30] {
        insert_value(&mut tree, value);
    }

    let root = tree.root().expect("non-empty");
    assert_eq!((root.k, root.c), (20, Color::Black));
    let left = tree.left(root).expect("left child");
    let right = tree.right(root).expect("right child");
    assert_eq!((left.k, left.c), (10, Color::Red));
    assert_eq!((right.k, right.c), (30, Color::Red));
    assert_eq!(
        tree.print_tree(),
        "R----20(BLACK)\n   L----10(RED)\n   R----30(RED)\n"
    );
}

#[test]
fn rb_tree_delete_inner_node_matrix() {
    let mut tree = RedBlackTree::new();
    for value in [10, 18, 7, 15, 16, 30, 25, 40, 60, 2, 1, 70] {
        insert_value(&mut tree, value);
    }
    assert_eq!(tree.len(), 12);

    delete_value(&mut tree, 18);
    assert!(tree.search(18).is_none());
    assert_eq!(tree.search(16).map(|n| n.k), Some(16));
    assert_eq!(tree.len(), 11);
    assert_eq!(in_order(&tree), vec![1, 2, 7, 10, 15, 16, 25, 30, 40, 60, 70]);
}

#[test]
fn rb_tree_single_node_delete_and_reinsert_matrix() {
    let mut tree = RedBlackTree::new();
    insert_value(&mut tree, 5);
    delete_value(&mut tree, 5);
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.print_tree(), "");

    insert_value(&mut tree, 5);
    let root = tree.root().expect("non-empty");
    assert_eq!((root.k, root.c), (5, Color::Black));
    assert_eq!(tree.capacity(), 1);
}

#[test]
fn rb_tree_duplicate_insert_is_idempotent_matrix() {
    let mut once = RedBlackTree::new();
    let mut twice = RedBlackTree::new();
    for value in [41, 38, 31, 12, 19, 8] {
        once.insert(value);
        twice.insert(value);
        twice.insert(value);
    }
    assert_eq!(once.print_tree(), twice.print_tree());
    assert_eq!(once.len(), twice.len());
    twice.assert_valid().unwrap();
}

#[test]
fn rb_tree_delete_missing_is_noop_matrix() {
    let mut tree = RedBlackTree::new();
    tree.delete(1);
    assert!(tree.is_empty());

    for value in [5, 3, 8, 1, 4] {
        insert_value(&mut tree, value);
    }
    let before = tree.print_tree();
    delete_value(&mut tree, 99);
    delete_value(&mut tree, 2);
    assert_eq!(tree.print_tree(), before);
    assert_eq!(tree.len(), 5);
}

#[test]
fn rb_tree_search_matrix() {
    let mut tree = RedBlackTree::new();
    assert!(tree.search(0).is_none());
    for value in [-5, 0, 5, i32::MIN, i32::MAX] {
        insert_value(&mut tree, value);
    }
    for value in [-5, 0, 5, i32::MIN, i32::MAX] {
        assert!(tree.contains(value), "missing {value}");
    }
    for value in [-4, 1, 6] {
        assert!(!tree.contains(value), "unexpected {value}");
    }
}

#[test]
fn rb_tree_numbers_from_0_to_100_matrix() {
    let mut tree = RedBlackTree::new();
    for i in 0..=100 {
        insert_value(&mut tree, i);
        assert_eq!(tree.len(), (i + 1) as usize);
    }
    for i in 0..=100 {
        delete_value(&mut tree, i);
        assert_eq!(tree.len(), (100 - i) as usize);
    }
    assert!(tree.is_empty());
}

#[test]
fn rb_tree_numbers_from_100_to_11_matrix() {
    let mut tree = RedBlackTree::new();
    for i in (11..=100).rev() {
        insert_value(&mut tree, i);
    }
    for i in (11..=100).rev() {
        delete_value(&mut tree, i);
    }
    assert!(tree.root().is_none());
}

#[test]
fn rb_tree_numbers_both_directions_from_50_matrix() {
    let mut tree = RedBlackTree::new();
    for i in 0..=100 {
        insert_value(&mut tree, 50 + i);
        insert_value(&mut tree, 50 - i);
    }
    // 50 + 0 and 50 - 0 collide.
    assert_eq!(tree.len(), 201);
    for i in 0..=100 {
        delete_value(&mut tree, 50 - i);
        delete_value(&mut tree, 50 + i);
    }
    assert!(tree.is_empty());
}

#[test]
fn rb_tree_insert_delete_various_numbers_matrix() {
    let mut tree = RedBlackTree::new();
    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        insert_value(&mut tree, value);
    }
    assert_eq!(tree.len(), 13);

    delete_value(&mut tree, 100);
    assert_eq!(tree.len(), 12);

    delete_value(&mut tree, 33);
    delete_value(&mut tree, 33);
    assert_eq!(tree.len(), 11);

    delete_value(&mut tree, 10);
    delete_value(&mut tree, 60);
    delete_value(&mut tree, 22);
    assert_eq!(tree.len(), 8);
    assert_eq!(in_order(&tree), vec![11, 12, 25, 50, 51, 55, 59, 88]);
}

#[test]
fn rb_tree_print_left_indent_matrix() {
    let mut tree = RedBlackTree::new();
    for value in [20, 10, 30, 5] {
        insert_value(&mut tree, value);
    }
    assert_eq!(
        tree.print_tree(),
        "R----20(BLACK)\n   L----10(BLACK)\n   |  L----5(RED)\n   R----30(BLACK)\n"
    );
}
