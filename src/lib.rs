//! Ordered sets backed by binary search trees that restructure themselves on every mutation.
//!
//! - [`avl_tree::AvlTree`] keeps the heights of sibling subtrees within one of each other.
//! - [`splay_tree::SplayTree`] moves every accessed key to the root.
//! - [`red_black_tree::RedBlackTree`] is a left-leaning red black tree.
//!
//! All trees implement [`OrderedSet`] and [`Traverse`], so they can be driven interchangeably
//! with each other and with `std::collections::BTreeSet`. The [`harness`] module times the
//! structures against each other on seeded random workloads.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod avl_tree;
pub mod harness;
mod ordered_set;
pub mod red_black_tree;
pub mod splay_tree;
pub mod traversal;

pub use crate::ordered_set::{OrderedSet, Traverse};
