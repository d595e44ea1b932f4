use std::collections::BTreeSet;

/// The operations every ordered set in this crate supports, allowing the trees to be driven
/// interchangeably.
///
/// Inserting a key that is already present and removing a key that is absent are no-ops.
/// `find` takes `&mut self` because self-adjusting trees restructure on every lookup.
pub trait OrderedSet<T> {
    /// A short human-readable name for the structure.
    const NAME: &'static str;

    /// Inserts `key` if it is absent.
    fn insert(&mut self, key: T);

    /// Returns `true` if `key` is in the set. Self-adjusting sets may restructure themselves.
    fn find(&mut self, key: &T) -> bool;

    /// Removes `key` if it is present.
    fn remove(&mut self, key: &T);

    /// Returns the number of keys in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Depth-first and breadth-first traversals over the keys of a tree. Traversals never
/// restructure the tree.
pub trait Traverse<T> {
    /// Returns the keys with each node preceding its subtrees.
    fn pre_order(&self) -> Vec<&T>;

    /// Returns the keys in ascending order.
    fn in_order(&self) -> Vec<&T>;

    /// Returns the keys with each node following its subtrees.
    fn post_order(&self) -> Vec<&T>;

    /// Returns the keys level by level, left to right.
    fn level_order(&self) -> Vec<&T>;
}

impl<T> OrderedSet<T> for BTreeSet<T>
where
    T: Ord,
{
    const NAME: &'static str = "BTreeSet";

    fn insert(&mut self, key: T) {
        BTreeSet::insert(self, key);
    }

    fn find(&mut self, key: &T) -> bool {
        self.contains(key)
    }

    fn remove(&mut self, key: &T) {
        BTreeSet::remove(self, key);
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}
