use crate::splay_tree::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

/// A node on the splay path that still has to be rotated, together with the directions taken at
/// it and at its child.
type Frame<T> = (Box<Node<T>>, Ordering, Ordering);

/// Splays the tree using `cmp` to steer the descent.
///
/// `cmp` is called with the depth of a node and its key and returns the direction to take at that
/// node, with `Ordering::Equal` marking the target. The descent stops at the target or at the
/// last node before falling off the tree, and that node becomes the root.
///
/// Nodes are paired from the top of the path: a zig-zig or zig-zag step is applied at a node once
/// the subtree two levels below it has been splayed, and a lone zig is applied when the target is
/// a direct child. The pending steps are kept on an explicit stack, so the depth of the tree does
/// not bound the call stack.
fn splay_by<T, F>(tree: &mut Tree<T>, mut cmp: F)
where
    F: FnMut(usize, &T) -> Ordering,
{
    let mut stack: Vec<Frame<T>> = Vec::new();
    let mut current = tree.take();
    let mut depth = 0;

    let mut result = loop {
        let mut node = match current {
            Some(node) => node,
            None => break None,
        };

        let order = cmp(depth, &node.key);
        let child = match order {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => break Some(node),
        };

        match child.as_ref().map(|child| cmp(depth + 1, &child.key)) {
            None => break Some(node),
            Some(Ordering::Equal) => {
                if order == Ordering::Less {
                    node.rotate_right();
                } else {
                    node.rotate_left();
                }
                break Some(node);
            },
            Some(child_order) => {
                let child = match order {
                    Ordering::Less => node.left.as_mut(),
                    _ => node.right.as_mut(),
                }
                .expect("Expected child node on the splay path.");
                current = match child_order {
                    Ordering::Less => child.left.take(),
                    _ => child.right.take(),
                };
                stack.push((node, order, child_order));
                depth += 2;
            },
        }
    };

    while let Some((mut node, order, child_order)) = stack.pop() {
        {
            let child = match order {
                Ordering::Less => node.left.as_mut(),
                _ => node.right.as_mut(),
            }
            .expect("Expected child node on the splay path.");

            match child_order {
                Ordering::Less => child.left = result,
                _ => child.right = result,
            }

            // zig-zag: lift the splayed grandchild above the child first
            if order != child_order {
                match child_order {
                    Ordering::Less => child.rotate_right(),
                    _ => child.rotate_left(),
                }
            }
        }

        // zig-zig: lift the child above the node first
        if order == child_order {
            match order {
                Ordering::Less => node.rotate_right(),
                _ => node.rotate_left(),
            }
        }

        match order {
            Ordering::Less => node.rotate_right(),
            _ => node.rotate_left(),
        }
        result = Some(node);
    }

    *tree = result;
}

/// Splays `key` to the root if it exists, or the last node reached while searching for it.
pub fn splay<T>(tree: &mut Tree<T>, key: &T)
where
    T: Ord,
{
    splay_by(tree, |_, node_key| key.cmp(node_key));
}

/// Splays the node at the end of `path` to the root. `path` holds the direction taken at each
/// depth starting from the root.
pub fn splay_path<T>(tree: &mut Tree<T>, path: &[Ordering]) {
    splay_by(tree, |depth, _| path.get(depth).copied().unwrap_or(Ordering::Equal));
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let mut curr = tree;
    while curr.as_ref().map_or(false, |node| node.left.is_some()) {
        curr = &mut curr.as_mut().expect("Expected a non-empty tree.").left;
    }

    let mut node = curr.take().expect("Expected a non-empty tree.");
    *curr = node.right.take();
    node
}

/// Detaches `node` from its children and returns its key together with the subtree that takes
/// its place. A node with two children is replaced by its in-order successor.
fn unlink<T>(node: Box<Node<T>>) -> (T, Tree<T>) {
    let Node { key, left, right } = *node;
    match (left, right) {
        (None, right) => (key, right),
        (left, None) => (key, left),
        (left, mut right) => {
            let mut successor = remove_min(&mut right);
            successor.left = left;
            successor.right = right;
            (key, Some(successor))
        },
    }
}

/// Inserts `key` if it is absent and splays the node holding `key` to the root. Returns `true` if
/// a new node was created.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    let mut path = Vec::new();
    let inserted = {
        let mut curr = &mut *tree;
        loop {
            let order = match *curr {
                Some(ref node) => key.cmp(&node.key),
                None => {
                    *curr = Some(Box::new(Node::new(key)));
                    break true;
                },
            };
            if order == Ordering::Equal {
                break false;
            }
            path.push(order);
            let node = curr.as_mut().expect("Expected a non-empty tree.");
            curr = match order {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    };

    splay_path(tree, &path);
    inserted
}

/// Removes `key` from the tree and returns it, or returns `None` if it is absent.
///
/// Removing the root does not splay. Removing any other node splays its parent to the root, and
/// failing to find `key` splays the last node reached during the search.
pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let is_root = match tree {
        Some(node) => node.key == *key,
        None => return None,
    };

    if is_root {
        let node = tree.take().expect("Expected a non-empty tree.");
        let (removed, replacement) = unlink(node);
        *tree = replacement;
        return Some(removed);
    }

    let mut path = Vec::new();
    let removed = {
        let mut curr = &mut *tree;
        loop {
            let order = match *curr {
                Some(ref node) => key.cmp(&node.key),
                None => break None,
            };
            if order == Ordering::Equal {
                let node = curr.take().expect("Expected a non-empty tree.");
                let (removed, replacement) = unlink(node);
                *curr = replacement;
                break Some(removed);
            }
            path.push(order);
            let node = curr.as_mut().expect("Expected a non-empty tree.");
            curr = match order {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
    };

    // Both the parent of a removed node and the last node reached by a failed search sit at the
    // end of the path minus its final step. The root was handled above, so a missing step means
    // the descent is broken.
    let (_, to_parent) = path
        .split_last()
        .expect("Expected a parent for a node below the root.");
    splay_path(tree, to_parent);
    removed
}

/// Splays the tree towards `key` and reports whether `key` ended up at the root.
pub fn find<T>(tree: &mut Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    splay(tree, key);
    tree.as_ref().map_or(false, |node| node.key == *key)
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

#[cfg(test)]
pub mod tests {
    use super::Tree;
    use crate::traversal;

    /// Panics unless every key of `tree` is ordered relative to its ancestors.
    pub fn check_invariants<T>(tree: &Tree<T>)
    where
        T: Ord,
    {
        let keys = traversal::in_order(tree.as_deref());
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
