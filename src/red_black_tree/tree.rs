use crate::red_black_tree::node::{Color, Node};
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn is_red<T>(tree: &Tree<T>) -> bool {
    tree.as_ref().map_or(false, |node| node.is_red())
}

// a black left child whose own left child is black has to borrow a red link before the descent
fn needs_red_left<T>(node: &Node<T>) -> bool {
    node.left
        .as_ref()
        .map_or(false, |child| !child.is_red() && !is_red(&child.left))
}

fn needs_red_right<T>(node: &Node<T>) -> bool {
    node.right
        .as_ref()
        .map_or(false, |child| !child.is_red() && !is_red(&child.left))
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(node) = tree {
        if node.left.is_some() {
            if needs_red_left(node) {
                node.move_red_left();
            }

            let ret = remove_min(&mut node.left);
            node.fix_up();
            return ret;
        }
    }

    // left leaning, so a node without a left child has no right child either
    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

/// Recolors the root red when both of its children are black so that removal can borrow from it.
pub fn prepare_root<T>(tree: &mut Tree<T>) {
    if let Some(node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

pub fn blacken_root<T>(tree: &mut Tree<T>) {
    if let Some(node) = tree {
        node.color = Color::Black;
    }
}

/// Inserts `key` if it is absent. Returns `true` if a new node was created.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    match tree {
        Some(node) => {
            let inserted = match key.cmp(&node.key) {
                Ordering::Less => insert(&mut node.left, key),
                Ordering::Greater => insert(&mut node.right, key),
                Ordering::Equal => return false,
            };
            node.fix_up();
            inserted
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            true
        },
    }
}

// precondition: `key` exists in the tree
pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> T
where
    T: Ord,
{
    let mut node = tree.take().expect("Expected a non-empty tree.");

    let ret = if *key < node.key {
        if needs_red_left(&node) {
            node.move_red_left();
        }
        let ret = remove(&mut node.left, key);
        *tree = Some(node);
        ret
    } else {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if *key == node.key && node.right.is_none() {
            debug_assert!(node.left.is_none());
            return node.key;
        }

        if needs_red_right(&node) {
            node.move_red_right();
        }

        if *key == node.key {
            let Node { key: removed, color, left, mut right } = *node;
            let mut successor = remove_min(&mut right);
            successor.left = left;
            successor.right = right;
            successor.color = color;
            *tree = Some(successor);
            removed
        } else {
            let ret = remove(&mut node.right, key);
            *tree = Some(node);
            ret
        }
    };

    if let Some(node) = tree {
        node.fix_up();
    }
    ret
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    let mut curr = tree.as_ref()?;
    while let Some(ref left_node) = curr.left {
        curr = left_node;
    }
    Some(&curr.key)
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    let mut curr = tree.as_ref()?;
    while let Some(ref right_node) = curr.right {
        curr = right_node;
    }
    Some(&curr.key)
}
