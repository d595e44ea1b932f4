use crate::splay_tree::tree;
use crate::traversal::BinaryNode;
use std::mem;

pub struct Node<T> {
    pub key: T,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }

    /// Promotes the right child into this node's position. Does nothing if there is no right
    /// child.
    pub fn rotate_left(&mut self) {
        if let Some(mut child) = self.right.take() {
            self.right = child.left.take();
            mem::swap(&mut *child, self);
            self.left = Some(child);
        }
    }

    /// Promotes the left child into this node's position. Does nothing if there is no left
    /// child.
    pub fn rotate_right(&mut self) {
        if let Some(mut child) = self.left.take() {
            self.left = child.right.take();
            mem::swap(&mut *child, self);
            self.right = Some(child);
        }
    }
}

impl<T> BinaryNode for Node<T> {
    type Key = T;

    fn key(&self) -> &T {
        &self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn take_children(&mut self) -> (tree::Tree<T>, tree::Tree<T>) {
        (self.left.take(), self.right.take())
    }
}
