//! Traversals shared by every tree in the crate.
//!
//! Each traversal walks the tree with an explicit stack or queue instead of recursing, so a
//! degenerate tree (a splay tree built from ascending keys is a single chain) can be visited and
//! torn down without exhausting the call stack.

use std::collections::VecDeque;

/// A binary search tree node that exclusively owns its children.
pub trait BinaryNode: Sized {
    type Key;

    fn key(&self) -> &Self::Key;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;

    /// Detaches both children from the node and returns them as `(left, right)`.
    fn take_children(&mut self) -> (Option<Box<Self>>, Option<Box<Self>>);
}

/// Returns the keys of the tree rooted at `root` with each node preceding its subtrees.
pub fn pre_order<N>(root: Option<&N>) -> Vec<&N::Key>
where
    N: BinaryNode,
{
    let mut ret = Vec::new();
    let mut stack: Vec<&N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        ret.push(node.key());
        stack.extend(node.right());
        stack.extend(node.left());
    }
    ret
}

/// Returns the keys of the tree rooted at `root` in ascending order.
pub fn in_order<N>(root: Option<&N>) -> Vec<&N::Key>
where
    N: BinaryNode,
{
    InOrderIter::new(root).collect()
}

/// Returns the keys of the tree rooted at `root` with each node following its subtrees.
pub fn post_order<N>(root: Option<&N>) -> Vec<&N::Key>
where
    N: BinaryNode,
{
    // node-right-left visited in reverse is left-right-node
    let mut ret = Vec::new();
    let mut stack: Vec<&N> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        ret.push(node.key());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    ret.reverse();
    ret
}

/// Returns the keys of the tree rooted at `root` level by level, left to right.
pub fn level_order<N>(root: Option<&N>) -> Vec<&N::Key>
where
    N: BinaryNode,
{
    let mut ret = Vec::new();
    let mut queue: VecDeque<&N> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        ret.push(node.key());
        queue.extend(node.left());
        queue.extend(node.right());
    }
    ret
}

/// Returns the number of nodes on the longest root-to-leaf path, or `0` for an empty tree.
pub fn depth<N>(root: Option<&N>) -> usize
where
    N: BinaryNode,
{
    let mut depth = 0;
    let mut level: Vec<&N> = root.into_iter().collect();
    while !level.is_empty() {
        depth += 1;
        level = level
            .into_iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }
    depth
}

/// Drops every node of the tree rooted at `root` one at a time.
pub fn dismantle<N>(root: Option<Box<N>>)
where
    N: BinaryNode,
{
    let mut stack: Vec<Box<N>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        let (left, right) = node.take_children();
        stack.extend(left);
        stack.extend(right);
    }
}

/// A lazy in-order iterator over the keys of a tree.
pub struct InOrderIter<'a, N> {
    current: Option<&'a N>,
    stack: Vec<&'a N>,
}

impl<'a, N> InOrderIter<'a, N>
where
    N: BinaryNode,
{
    pub fn new(root: Option<&'a N>) -> Self {
        InOrderIter {
            current: root,
            stack: Vec::new(),
        }
    }
}

impl<'a, N> Iterator for InOrderIter<'a, N>
where
    N: BinaryNode,
{
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = node.left();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right();
            node.key()
        })
    }
}
