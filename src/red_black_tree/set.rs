use crate::ordered_set::{OrderedSet, Traverse};
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;
use crate::traversal::{self, InOrderIter};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a left-leaning red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// No red node has a red child and every path from the root to a leaf passes through the same
/// number of black nodes, which bounds the height by `2 log n`.
///
/// # Examples
///
/// ```
/// use bst_collections::red_black_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(0);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 2);
/// assert!(tree.find(&3));
///
/// assert_eq!(tree.remove(&0), Some(0));
/// assert_eq!(tree.remove(&1), None);
/// ```
pub struct RedBlackTree<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> RedBlackTree<T> {
    /// Constructs a new, empty `RedBlackTree<T>`.
    pub fn new() -> Self {
        RedBlackTree { tree: None, len: 0 }
    }

    /// Inserts a key into the tree. Returns `false` if the key is already present.
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = tree::insert(&mut self.tree, key);
        tree::blacken_root(&mut self.tree);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the tree. If the key exists in the tree, it will return the removed
    /// key. Otherwise it will return `None` and the tree is left untouched.
    pub fn remove(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        if !self.contains(key) {
            return None;
        }

        tree::prepare_root(&mut self.tree);
        let ret = tree::remove(&mut self.tree, key);
        tree::blacken_root(&mut self.tree);
        self.len -= 1;
        Some(ret)
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert!(!tree.find(&0));
    /// assert!(tree.find(&1));
    /// ```
    pub fn find(&self, key: &T) -> bool
    where
        T: Ord,
    {
        tree::contains(&self.tree, key)
    }

    /// Checks if a key exists in the tree. Identical to `find`.
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.find(key)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.key)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        traversal::depth(self.tree.as_deref())
    }

    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    pub fn pre_order(&self) -> Vec<&T> {
        traversal::pre_order(self.tree.as_deref())
    }

    pub fn in_order(&self) -> Vec<&T> {
        traversal::in_order(self.tree.as_deref())
    }

    pub fn post_order(&self) -> Vec<&T> {
        traversal::post_order(self.tree.as_deref())
    }

    pub fn level_order(&self) -> Vec<&T> {
        traversal::level_order(self.tree.as_deref())
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    pub fn iter(&self) -> RedBlackTreeIter<'_, T> {
        RedBlackTreeIter {
            inner: InOrderIter::new(self.tree.as_deref()),
        }
    }
}

/// An iterator for `RedBlackTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct RedBlackTreeIter<'a, T> {
    inner: InOrderIter<'a, Node<T>>,
}

impl<'a, T> Iterator for RedBlackTreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type IntoIter = RedBlackTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = RedBlackTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> fmt::Debug for RedBlackTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> OrderedSet<T> for RedBlackTree<T>
where
    T: Ord,
{
    const NAME: &'static str = "RedBlack";

    fn insert(&mut self, key: T) {
        RedBlackTree::insert(self, key);
    }

    fn find(&mut self, key: &T) -> bool {
        RedBlackTree::find(self, key)
    }

    fn remove(&mut self, key: &T) {
        RedBlackTree::remove(self, key);
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Traverse<T> for RedBlackTree<T> {
    fn pre_order(&self) -> Vec<&T> {
        RedBlackTree::pre_order(self)
    }

    fn in_order(&self) -> Vec<&T> {
        RedBlackTree::in_order(self)
    }

    fn post_order(&self) -> Vec<&T> {
        RedBlackTree::post_order(self)
    }

    fn level_order(&self) -> Vec<&T> {
        RedBlackTree::level_order(self)
    }
}
