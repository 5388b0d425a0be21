mod iter;
mod node;


use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use tracing::{event, Level};

use crate::comparator::Comparator;
use crate::error::{CollectionError, Result};
use crate::interface::{Collection, Membership, PriorityCollection};
use self::node::{Link, Node};

pub use self::iter::Iter;


/// An unbalanced binary search tree over a caller-supplied [`Comparator`].
///
/// Every value in a node's left subtree compares as less than or equal to the node's value, and
/// every value in its right subtree compares as greater. Duplicates are kept, and go left.
///
/// The tree doubles as a [`PriorityCollection`] over its minimum entry. Its depth depends only on
/// insertion order; every operation walks the tree iteratively, so even a degenerate
/// (list-shaped) tree cannot overflow the stack.
pub struct BinaryTree<T, C> {
    root: Link<T>,
    len:  usize,
    cmp:  C,
}

impl<T, C> BinaryTree<T, C> {
    #[inline]
    #[must_use]
    pub const fn new(cmp: C) -> Self {
        Self {
            root: None,
            len:  0,
            cmp,
        }
    }

    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Iterate over the entries in ascending order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root, self.len)
    }

    /// The number of nodes on the longest path from the root to a leaf, which is `0` for an
    /// empty tree.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();

        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }

        height
    }
}

impl<T, C: Comparator<T>> BinaryTree<T, C> {
    /// Remove one entry comparing as equal to `value`, and report whether one was found.
    ///
    /// A node without a right child is replaced by its left subtree. Otherwise, the minimum of its
    /// right subtree is detached and takes the node's place.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Like [`BinaryTree::remove`], but returns the removed entry.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let cmp = &self.cmp;
        let mut link = &mut self.root;

        loop {
            let ordering = cmp.cmp(value, &link.as_deref()?.value);
            if ordering.is_eq() {
                break;
            }
            if let Some(node) = link {
                link = if ordering.is_lt() { &mut node.left } else { &mut node.right };
            }
        }

        let removed = link.take()?;
        let (removed_value, replacement) = node::promote_successor(removed);
        *link = replacement;
        self.len -= 1;

        Some(removed_value)
    }
}

impl<T, C: Default> Default for BinaryTree<T, C> {
    #[inline]
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, C> Drop for BinaryTree<T, C> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<T: Clone, C: Clone> Clone for BinaryTree<T, C> {
    /// Copy the tree breadth-first, preserving its exact shape.
    fn clone(&self) -> Self {
        event!(Level::TRACE, "cloning a binary tree of length {}", self.len);

        // Each visited node, along with the breadth-first positions of its children.
        let mut shape: Vec<(&T, Option<usize>, Option<usize>)> = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            let mut children = [None, None];
            for (position, child) in children.iter_mut().zip([&node.left, &node.right]) {
                if let Some(child) = child.as_deref() {
                    queue.push_back(child);
                    *position = Some(shape.len() + queue.len());
                }
            }
            let [left, right] = children;
            shape.push((&node.value, left, right));
        }

        // Children always come later in breadth-first order, so build from the back.
        let mut built: Vec<Link<T>> = Vec::new();
        built.resize_with(shape.len(), || None);
        for (position, (value, left, right)) in shape.into_iter().enumerate().rev() {
            let mut take_built = |child: Option<usize>| {
                child.and_then(|child| built.get_mut(child).and_then(Option::take))
            };
            let node = Node {
                value: value.clone(),
                left:  take_built(left),
                right: take_built(right),
            };
            if let Some(slot) = built.get_mut(position) {
                *slot = Some(Box::new(node));
            }
        }

        Self {
            root: built.first_mut().and_then(Option::take),
            len:  self.len,
            cmp:  self.cmp.clone(),
        }
    }
}

impl<T: Debug, C> Debug for BinaryTree<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Collection for BinaryTree<T, C> {
    type Item = T;
    type Iter<'a> = Iter<'a, T> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        node::dismantle(self.root.take());
        self.len = 0;
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Iter::new(&self.root, self.len)
    }
}

impl<T, C: Comparator<T>> PriorityCollection for BinaryTree<T, C> {
    /// Insert `value` as a new leaf. The length grows even if an equal value is present.
    fn offer(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if self.cmp.cmp(&value, &node.value).is_le() {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *link = Some(Box::new(Node::leaf(value)));
        self.len += 1;
    }

    /// The minimum entry, which is the leftmost one.
    fn peek(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(CollectionError::EmptyContainer)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    fn poll(&mut self) -> Result<T> {
        let leftmost = node::take_leftmost(&mut self.root).ok_or(CollectionError::EmptyContainer)?;
        self.len -= 1;
        Ok(leftmost.value)
    }
}

impl<T, C: Comparator<T>> Membership for BinaryTree<T, C> {
    /// Search for an entry comparing as equal to `value`, using the comparator.
    fn contains(&self, value: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match self.cmp.cmp(value, &node.value) {
                Ordering::Less    => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal   => return true,
            };
        }
        false
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryTree<T, C> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.offer_all(iter);
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for BinaryTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.offer_all(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryTree<T, C> {
    type Item     = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
