use crate::ordered_set::{OrderedSet, Traverse};
use crate::splay_tree::node::Node;
use crate::splay_tree::tree;
use crate::traversal::{self, InOrderIter};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a splay tree.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that
/// recently accessed keys are quick to access again. After each operation, the node that was
/// accessed is "splayed" to the root of the tree with a sequence of rotations. No balancing
/// metadata is stored, and operations run in amortized `O(log n)` time.
///
/// # Examples
///
/// ```
/// use bst_collections::splay_tree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// tree.insert(0);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 2);
/// assert!(tree.find(&0));
/// assert_eq!(tree.root(), Some(&0));
///
/// assert_eq!(tree.remove(&0), Some(0));
/// assert_eq!(tree.remove(&1), None);
/// ```
pub struct SplayTree<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> SplayTree<T> {
    /// Constructs a new, empty `SplayTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<u32> = SplayTree::new();
    /// ```
    pub fn new() -> Self {
        SplayTree { tree: None, len: 0 }
    }

    /// Inserts a key into the tree and splays it to the root. If the key already exists, no node
    /// is created but the existing node is still splayed. Returns `true` if the key was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert!(tree.insert(1));
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.root(), Some(&1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the tree. If the key exists in the tree, it will return the removed
    /// key. Otherwise it will return `None`.
    ///
    /// Removing a key below the root splays its parent to the root. Removing an absent key splays
    /// the last node reached while searching for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
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

    /// Checks if a key exists in the tree and splays the tree. If the key exists it becomes the
    /// root, otherwise the last node reached while searching for it becomes the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.insert(5);
    /// assert!(tree.find(&1));
    /// assert_eq!(tree.root(), Some(&1));
    /// assert!(!tree.find(&7));
    /// assert_eq!(tree.root(), Some(&5));
    /// ```
    pub fn find(&mut self, key: &T) -> bool
    where
        T: Ord,
    {
        tree::find(&mut self.tree, key)
    }

    /// Checks if a key exists in the tree. Note that `contains` does not splay the tree in order
    /// to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.root(), Some(&2));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        traversal::dismantle(self.tree.take());
        self.len = 0;
    }

    /// Returns the key stored at the root of the tree.
    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.key)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        traversal::depth(self.tree.as_deref())
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty. Note that `min`
    /// does not splay the tree in order to use a non-mutable reference.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty. Note that `max`
    /// does not splay the tree in order to use a non-mutable reference.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the keys of the tree in pre-order without splaying.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::splay_tree::SplayTree;
    ///
    /// let tree: SplayTree<u32> = (1..=3).collect();
    /// assert_eq!(tree.pre_order(), vec![&3, &2, &1]);
    /// ```
    pub fn pre_order(&self) -> Vec<&T> {
        traversal::pre_order(self.tree.as_deref())
    }

    /// Returns the keys of the tree in ascending order without splaying.
    pub fn in_order(&self) -> Vec<&T> {
        traversal::in_order(self.tree.as_deref())
    }

    /// Returns the keys of the tree in post-order without splaying.
    pub fn post_order(&self) -> Vec<&T> {
        traversal::post_order(self.tree.as_deref())
    }

    /// Returns the keys of the tree in breadth-first order without splaying.
    pub fn level_order(&self) -> Vec<&T> {
        traversal::level_order(self.tree.as_deref())
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_collections::splay_tree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplayTreeIter<'_, T> {
        SplayTreeIter {
            inner: InOrderIter::new(self.tree.as_deref()),
        }
    }
}

/// An iterator for `SplayTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct SplayTreeIter<'a, T> {
    inner: InOrderIter<'a, Node<T>>,
}

impl<'a, T> Iterator for SplayTreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, T> IntoIterator for &'a SplayTree<T> {
    type IntoIter = SplayTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Drop for SplayTree<T> {
    fn drop(&mut self) {
        traversal::dismantle(self.tree.take());
    }
}

impl<T> Default for SplayTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SplayTree<T>
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

impl<T> FromIterator<T> for SplayTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = SplayTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> fmt::Debug for SplayTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> OrderedSet<T> for SplayTree<T>
where
    T: Ord,
{
    const NAME: &'static str = "Splay";

    fn insert(&mut self, key: T) {
        SplayTree::insert(self, key);
    }

    fn find(&mut self, key: &T) -> bool {
        SplayTree::find(self, key)
    }

    fn remove(&mut self, key: &T) {
        SplayTree::remove(self, key);
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Traverse<T> for SplayTree<T> {
    fn pre_order(&self) -> Vec<&T> {
        SplayTree::pre_order(self)
    }

    fn in_order(&self) -> Vec<&T> {
        SplayTree::in_order(self)
    }

    fn post_order(&self) -> Vec<&T> {
        SplayTree::post_order(self)
    }

    fn level_order(&self) -> Vec<&T> {
        SplayTree::level_order(self)
    }
}
