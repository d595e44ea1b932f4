use crate::red_black_tree::tree::{self, Tree};
use crate::traversal::BinaryNode;
use std::mem;

/// The color of the link from a node's parent to the node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A node of a left-leaning red black tree. Red links only ever lean left.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    /// New nodes are always attached with a red link.
    pub fn new(key: T) -> Self {
        Node {
            key,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    fn left_left_is_red(&self) -> bool {
        self.left
            .as_ref()
            .map_or(false, |child| child.is_red() && tree::is_red(&child.left))
    }

    fn left_grandchild_is_red(&self) -> bool {
        self.left.as_ref().map_or(false, |child| tree::is_red(&child.left))
    }

    fn right_left_is_red(&self) -> bool {
        self.right.as_ref().map_or(false, |child| tree::is_red(&child.left))
    }

    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        for child in self.left.iter_mut().chain(self.right.iter_mut()) {
            child.color = child.color.flip();
        }
    }

    /// Turns a right-leaning red link into a left-leaning one. The promoted child inherits this
    /// node's color.
    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.left = Some(child);
    }

    /// Turns a left-leaning red link into a right-leaning one. The promoted child inherits this
    /// node's color.
    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.right = Some(child);
    }

    /// Restores the left-leaning invariants on the way back up after an insertion or removal.
    pub fn fix_up(&mut self) {
        if tree::is_red(&self.right) {
            self.rotate_left();
        }
        if self.left_left_is_red() {
            self.rotate_right();
        }
        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }
    }

    /// Makes the left child or one of its children red before descending left.
    pub fn move_red_left(&mut self) {
        self.flip_colors();
        if self.right_left_is_red() {
            if let Some(ref mut child) = self.right {
                child.rotate_right();
            }
            self.rotate_left();
            self.flip_colors();
        }
    }

    /// Makes the right child or one of its children red before descending right.
    pub fn move_red_right(&mut self) {
        self.flip_colors();
        if self.left_grandchild_is_red() {
            self.rotate_right();
            self.flip_colors();
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

    fn take_children(&mut self) -> (Tree<T>, Tree<T>) {
        (self.left.take(), self.right.take())
    }
}
