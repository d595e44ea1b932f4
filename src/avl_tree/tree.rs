use crate::avl_tree::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// `child_order` is the direction the insertion took at the heavy child, which tells apart the
// outer (single rotation) and inner (double rotation) cases.
fn balance_inserted<T>(tree: &mut Tree<T>, child_order: Ordering) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if child_order == Ordering::Greater {
            if let Some(child) = node.left.take() {
                node.left = Some(rotate_left(child));
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if child_order == Ordering::Less {
            if let Some(child) = node.right.take() {
                node.right = Some(rotate_right(child));
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if height(&child.left) >= height(&child.right) {
                node.left = Some(child);
            } else {
                node.left = Some(rotate_left(child));
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if height(&child.right) >= height(&child.left) {
                node.right = Some(child);
            } else {
                node.right = Some(rotate_right(child));
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a maximum node in the tree
fn remove_max<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(node) = tree {
        if node.right.is_some() {
            let ret = remove_max(&mut node.right);
            balance(tree);
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.left.take();
    node
}

/// Inserts `key` into `tree` if it is absent.
///
/// Returns `None` if the key was already present. Otherwise returns the direction the insertion
/// took at the root of `tree`, or `Ordering::Equal` if the key became the root of an empty tree.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> Option<Ordering>
where
    T: Ord,
{
    let (order, child_order) = match tree {
        Some(node) => {
            let order = key.cmp(&node.key);
            let child_order = match order {
                Ordering::Less => insert(&mut node.left, key),
                Ordering::Greater => insert(&mut node.right, key),
                Ordering::Equal => None,
            };
            (order, child_order?)
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return Some(Ordering::Equal);
        },
    };

    balance_inserted(tree, child_order);
    Some(order)
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let Node { key: removed, left, right, .. } = *node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (mut left, right) => {
                        // the in-order predecessor takes the place of the removed node
                        let mut predecessor = remove_max(&mut left);
                        predecessor.left = left;
                        predecessor.right = right;
                        *tree = Some(predecessor);
                    },
                }
                Some(removed)
            },
        },
        None => return None,
    };

    balance(tree);
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
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}
