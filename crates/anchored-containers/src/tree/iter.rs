use std::iter::FusedIterator;

use super::node::{Link, Node};


/// In-order iterator over the entries of a [`BinaryTree`], which visits them in ascending order
/// under the tree's comparator.
///
/// [`BinaryTree`]: super::BinaryTree
pub struct Iter<'a, T> {
    /// The nodes whose value and right subtree have not been visited, deepest last.
    ancestors: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    #[must_use]
    pub(super) fn new(root: &'a Link<T>, len: usize) -> Self {
        let mut iter = Self {
            ancestors: Vec::new(),
            remaining: len,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.ancestors.push(node);
            link = &node.left;
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            ancestors: self.ancestors.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.ancestors.pop()?;
        self.descend_left(&node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
