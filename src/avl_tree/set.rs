use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::ordered_set::{OrderedSet, Traverse};
use crate::traversal::{self, InOrderIter};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// rebalances the nodes on its search path with rotations, so all operations are `O(log n)` in
/// the worst case.
///
/// # Examples
///
/// ```
/// use bst_collections::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(0);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 2);
/// assert!(tree.find(&3));
/// assert_eq!(tree.min(), Some(&0));
///
/// assert_eq!(tree.remove(&0), Some(0));
/// assert_eq!(tree.remove(&1), None);
/// ```
pub struct AvlTree<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T> {
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree { tree: None, len: 0 }
    }

    /// Inserts a key into the tree. Returns `false` and leaves the tree untouched if the key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = tree::insert(&mut self.tree, key).is_some();
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the tree. If the key exists in the tree, it will return the removed
    /// key. Otherwise it will return `None`.
    ///
    /// A node with two children is replaced by its in-order predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        let ret = tree::remove(&mut self.tree, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
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

    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree, which is `0` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = (1..=7).collect();
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the key stored at the root of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = (1..=7).collect();
    /// assert_eq!(tree.root(), Some(&4));
    /// ```
    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.key)
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the keys of the tree in pre-order: every node precedes its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = (1..=3).collect();
    /// assert_eq!(tree.pre_order(), vec![&2, &1, &3]);
    /// ```
    pub fn pre_order(&self) -> Vec<&T> {
        traversal::pre_order(self.tree.as_deref())
    }

    /// Returns the keys of the tree in ascending order.
    pub fn in_order(&self) -> Vec<&T> {
        traversal::in_order(self.tree.as_deref())
    }

    /// Returns the keys of the tree in post-order: every node follows its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = (1..=3).collect();
    /// assert_eq!(tree.post_order(), vec![&1, &3, &2]);
    /// ```
    pub fn post_order(&self) -> Vec<&T> {
        traversal::post_order(self.tree.as_deref())
    }

    /// Returns the keys of the tree in breadth-first order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = (1..=7).collect();
    /// assert_eq!(tree.level_order(), vec![&4, &2, &6, &1, &3, &5, &7]);
    /// ```
    pub fn level_order(&self) -> Vec<&T> {
        traversal::level_order(self.tree.as_deref())
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter<'_, T> {
        AvlTreeIter {
            inner: InOrderIter::new(self.tree.as_deref()),
        }
    }
}

/// An iterator for `AvlTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct AvlTreeIter<'a, T> {
    inner: InOrderIter<'a, Node<T>>,
}

impl<'a, T> Iterator for AvlTreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type IntoIter = AvlTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for AvlTree<T>
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

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> fmt::Debug for AvlTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> OrderedSet<T> for AvlTree<T>
where
    T: Ord,
{
    const NAME: &'static str = "AVL";

    fn insert(&mut self, key: T) {
        AvlTree::insert(self, key);
    }

    fn find(&mut self, key: &T) -> bool {
        AvlTree::find(self, key)
    }

    fn remove(&mut self, key: &T) {
        AvlTree::remove(self, key);
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Traverse<T> for AvlTree<T> {
    fn pre_order(&self) -> Vec<&T> {
        AvlTree::pre_order(self)
    }

    fn in_order(&self) -> Vec<&T> {
        AvlTree::in_order(self)
    }

    fn post_order(&self) -> Vec<&T> {
        AvlTree::post_order(self)
    }

    fn level_order(&self) -> Vec<&T> {
        AvlTree::level_order(self)
    }
}
