#![expect(
    clippy::indexing_slicing,
    reason = "every index used here is a link stored in the arena, or a sentinel",
)]

mod iter;
mod merge_sort;


use std::fmt::{Debug, Formatter, Result as FmtResult};

use tracing::{event, Level};

use crate::{array::ArrayList, comparator::Comparator};
use crate::error::{CollectionError, Result};
use crate::interface::{Collection, Membership, Sequence};

pub use self::iter::{IntoIter, Iter};


/// Slot of the sentinel before the first entry.
const HEAD: usize = 0;
/// Slot of the sentinel after the last entry.
const TAIL: usize = 1;


struct Node<T> {
    /// `None` for the two sentinels and for vacant slots.
    value: Option<T>,
    prev:  usize,
    next:  usize,
}

impl<T> Node<T> {
    #[inline]
    const fn sentinel() -> Self {
        Self {
            value: None,
            prev:  HEAD,
            next:  TAIL,
        }
    }
}

/// A doubly linked list whose nodes live in an index-based arena.
///
/// Two sentinel nodes are always present, even when the list is empty, so the first and last
/// entries are each one link away. Slots freed by removals are reused by later insertions.
pub struct LinkedList<T> {
    nodes:  Vec<Node<T>>,
    vacant: Vec<usize>,
    len:    usize,
}

impl<T> LinkedList<T> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` entries before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(2));
        nodes.push(Node::sentinel());
        nodes.push(Node::sentinel());

        Self {
            nodes,
            vacant: Vec::new(),
            len:    0,
        }
    }

    /// Insert `value` as the new first entry.
    #[inline]
    pub fn add_head(&mut self, value: T) {
        let first = self.nodes[HEAD].next;
        self.link_between(value, HEAD, first);
    }

    /// Insert `value` as the new last entry.
    #[inline]
    pub fn add_tail(&mut self, value: T) {
        let last = self.nodes[TAIL].prev;
        self.link_between(value, last, TAIL);
    }

    /// Insert `value` so that it ends up at `index`.
    ///
    /// Unlike most positional operations, this never fails: an `index` of `self.len()` or more
    /// appends `value` to the end of the list.
    pub fn insert_at(&mut self, index: usize, value: T) {
        if index == 0 {
            self.add_head(value);
        } else if let Some(successor) = self.slot_of(index) {
            let predecessor = self.nodes[successor].prev;
            self.link_between(value, predecessor, successor);
        } else {
            self.add_tail(value);
        }
    }

    /// # Errors
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn get_head(&self) -> Result<&T> {
        self.nodes[self.nodes[HEAD].next]
            .value
            .as_ref()
            .ok_or(CollectionError::EmptyContainer)
    }

    /// # Errors
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn get_tail(&self) -> Result<&T> {
        self.nodes[self.nodes[TAIL].prev]
            .value
            .as_ref()
            .ok_or(CollectionError::EmptyContainer)
    }

    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] if `index` is not less than `self.len()`.
    pub fn get_at(&self, index: usize) -> Result<&T> {
        self.slot_of(index)
            .and_then(|slot| self.nodes[slot].value.as_ref())
            .ok_or(CollectionError::IndexOutOfRange { index, len: self.len })
    }

    /// # Errors
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn remove_head(&mut self) -> Result<T> {
        let first = self.nodes[HEAD].next;
        self.unlink(first).ok_or(CollectionError::EmptyContainer)
    }

    /// # Errors
    /// Returns [`CollectionError::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn remove_tail(&mut self) -> Result<T> {
        let last = self.nodes[TAIL].prev;
        self.unlink(last).ok_or(CollectionError::EmptyContainer)
    }

    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] if `index` is not less than `self.len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.slot_of(index)
            .and_then(|slot| self.unlink(slot))
            .ok_or(CollectionError::IndexOutOfRange { index, len: self.len })
    }

    /// Append a copy of each entry of `array`, in order.
    pub fn merge_array(&mut self, array: &ArrayList<T>)
    where
        T: Clone,
    {
        for value in array.as_slice() {
            self.add_tail(value.clone());
        }
    }

    /// Reverse the list in place, by swapping the direction of every link.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        event!(Level::TRACE, "reversing a linked list of length {}", self.len);

        let first = self.nodes[HEAD].next;
        let last = self.nodes[TAIL].prev;

        let mut slot = first;
        while slot != TAIL {
            let node = &mut self.nodes[slot];
            let next = node.next;
            node.next = node.prev;
            node.prev = next;
            slot = next;
        }

        self.nodes[HEAD].next = last;
        self.nodes[last].prev = HEAD;
        self.nodes[TAIL].prev = first;
        self.nodes[first].next = TAIL;
    }

    /// Sort the list in place with a stable merge sort, in ascending order under `cmp`.
    ///
    /// Entries are relinked rather than moved.
    pub fn sort_by<C: Comparator<T> + ?Sized>(&mut self, cmp: &C) {
        if self.len < 2 {
            return;
        }

        event!(Level::TRACE, "sorting a linked list of length {}", self.len);

        let first = self.nodes[HEAD].next;
        let sorted = self.merge_sort(first, cmp);
        self.nodes[HEAD].next = sorted;
        self.relink_backward();
    }

    /// Create a new list holding copies of the entries which satisfy `predicate`.
    #[must_use]
    pub fn filter<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Self
    where
        T: Clone,
    {
        self.iter()
            .filter(|&value| predicate(value))
            .cloned()
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T> LinkedList<T> {
    /// Find the slot holding the entry at `index`, walking from whichever end is closer.
    fn slot_of(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        let mut slot;
        if index < self.len / 2 {
            slot = self.nodes[HEAD].next;
            for _ in 0..index {
                slot = self.nodes[slot].next;
            }
        } else {
            slot = self.nodes[TAIL].prev;
            for _ in index + 1..self.len {
                slot = self.nodes[slot].prev;
            }
        }

        Some(slot)
    }

    fn link_between(&mut self, value: T, prev: usize, next: usize) {
        let node = Node {
            value: Some(value),
            prev,
            next,
        };

        let slot = if let Some(slot) = self.vacant.pop() {
            self.nodes[slot] = node;
            slot
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        };

        self.nodes[prev].next = slot;
        self.nodes[next].prev = slot;
        self.len += 1;
    }

    /// Unlink the node at `slot` and take its value, or return `None` if `slot` is a sentinel.
    fn unlink(&mut self, slot: usize) -> Option<T> {
        if slot == HEAD || slot == TAIL {
            return None;
        }

        let node = &mut self.nodes[slot];
        let value = node.value.take()?;
        let (prev, next) = (node.prev, node.next);

        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.vacant.push(slot);
        self.len -= 1;

        Some(value)
    }
}

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    /// Copy the entries, in order, into a freshly allocated arena.
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Collection for LinkedList<T> {
    type Item = T;
    type Iter<'a> = Iter<'a, T> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.nodes.truncate(2);
        self.nodes[HEAD] = Node::sentinel();
        self.nodes[TAIL] = Node::sentinel();
        self.vacant.clear();
        self.len = 0;
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Iter::new(self)
    }
}

impl<T> Sequence for LinkedList<T> {
    /// Insert `value` at the head of an empty list, and at the tail otherwise.
    #[inline]
    fn add(&mut self, value: T) {
        if self.len == 0 {
            self.add_head(value);
        } else {
            self.add_tail(value);
        }
    }

    /// Never fails; see [`LinkedList::insert_at`].
    #[inline]
    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        Self::insert_at(self, index, value);
        Ok(())
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        self.get_at(index)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Result<T> {
        Self::remove_at(self, index)
    }

    #[inline]
    fn reverse(&mut self) {
        Self::reverse(self);
    }

    #[inline]
    fn sort_by<C: Comparator<T> + ?Sized>(&mut self, cmp: &C) {
        Self::sort_by(self, cmp);
    }

    #[inline]
    fn filter<P: FnMut(&T) -> bool>(&self, predicate: P) -> Self
    where
        T: Clone,
    {
        Self::filter(self, predicate)
    }
}

impl<T: PartialEq> Membership for LinkedList<T> {
    fn contains(&self, value: &T) -> bool {
        self.iter().any(|entry| entry == value)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_tail(value);
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::comparator::{OrdComparator, Reversed};
    use super::*;


    /// Check that the backward links mirror the forward links.
    fn assert_links_consistent<T>(list: &LinkedList<T>) {
        let mut prev = HEAD;
        let mut slot = list.nodes[HEAD].next;
        let mut count = 0;
        while slot != TAIL {
            assert_eq!(list.nodes[slot].prev, prev);
            assert!(list.nodes[slot].value.is_some());
            prev = slot;
            slot = list.nodes[slot].next;
            count += 1;
        }
        assert_eq!(list.nodes[TAIL].prev, prev);
        assert_eq!(count, list.len());
    }

    fn list_of(values: &[i32]) -> LinkedList<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn head_and_tail_operations() {
        let mut list = LinkedList::new();
        assert_eq!(list.get_head(), Err(CollectionError::EmptyContainer));
        assert_eq!(list.get_tail(), Err(CollectionError::EmptyContainer));
        assert_eq!(list.remove_head(), Err(CollectionError::EmptyContainer));
        assert_eq!(list.remove_tail(), Err(CollectionError::EmptyContainer));

        list.add(2);
        list.add_head(1);
        list.add_tail(3);
        assert_links_consistent(&list);
        assert_eq!(list.values(), [1, 2, 3]);
        assert_eq!(list.get_head(), Ok(&1));
        assert_eq!(list.get_tail(), Ok(&3));

        assert_eq!(list.remove_head(), Ok(1));
        assert_eq!(list.remove_tail(), Ok(3));
        assert_eq!(list.remove_tail(), Ok(2));
        assert!(list.is_empty());
        assert_links_consistent(&list);
    }

    #[test]
    fn insert_at_clamps() {
        let mut list = list_of(&[1, 3]);
        list.insert_at(1, 2);
        list.insert_at(0, 0);
        list.insert_at(4, 4);
        list.insert_at(100, 5);

        assert_eq!(list.values(), [0, 1, 2, 3, 4, 5]);
        assert_links_consistent(&list);

        let mut empty = LinkedList::new();
        empty.insert_at(7, 'a');
        assert_eq!(empty.values(), ['a']);
    }

    #[test]
    fn positional_access() {
        let mut list = list_of(&[10, 11, 12, 13, 14]);
        for (index, expected) in (10..15).enumerate() {
            assert_eq!(list.get_at(index), Ok(&expected));
        }
        assert_eq!(
            list.get_at(5),
            Err(CollectionError::IndexOutOfRange { index: 5, len: 5 }),
        );

        assert_eq!(list.remove_at(3), Ok(13));
        assert_eq!(list.remove_at(0), Ok(10));
        assert_eq!(
            list.remove_at(3),
            Err(CollectionError::IndexOutOfRange { index: 3, len: 3 }),
        );
        assert_eq!(list.values(), [11, 12, 14]);
        assert_links_consistent(&list);
    }

    #[test]
    fn vacant_slots_are_reused() {
        let mut list = list_of(&[1, 2, 3]);
        let arena_len = list.nodes.len();

        assert_eq!(list.remove_at(1), Ok(2));
        list.add(4);
        assert_eq!(list.nodes.len(), arena_len);
        assert_eq!(list.values(), [1, 3, 4]);
        assert_links_consistent(&list);
    }

    #[test]
    fn reverse_in_place() {
        for len in 0..6 {
            let values: Vec<i32> = (0..len).collect();
            let mut list = list_of(&values);
            list.reverse();

            let reversed: Vec<i32> = values.iter().rev().copied().collect();
            assert_eq!(list.values(), reversed);
            assert_links_consistent(&list);
        }
    }

    #[test]
    fn sort_is_stable() {
        let mut list: LinkedList<(u8, char)> =
            [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')].into_iter().collect();

        list.sort_by(&|lhs: &(u8, char), rhs: &(u8, char)| lhs.0.cmp(&rhs.0));
        assert_eq!(list.values(), [(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c')]);
        assert_links_consistent(&list);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut list = list_of(&[5, -2, 9, 0, 0, 7, -2, 1]);
        list.sort_by(&OrdComparator);
        let once = list.values();
        list.sort_by(&OrdComparator);

        assert_eq!(list.values(), once);
        assert_eq!(once, [-2, -2, 0, 0, 1, 5, 7, 9]);
        assert_links_consistent(&list);

        list.sort_by(&Reversed(OrdComparator));
        assert_eq!(list.values(), [9, 7, 5, 1, 0, 0, -2, -2]);
        assert_eq!(list.get_tail(), Ok(&-2));
    }

    #[test]
    fn clone_merge_filter() {
        let mut list = list_of(&[1, 2, 3]);
        let copy = list.clone();
        list.add(4);
        assert_eq!(copy.values(), [1, 2, 3]);

        list.merge(&copy);
        assert_eq!(list.values(), [1, 2, 3, 4, 1, 2, 3]);

        list.merge_array(&[8, 9].into_iter().collect());
        assert_eq!(list.filter(|value| *value > 2).values(), [3, 4, 3, 8, 9]);
        assert!(list.contains(&9));
        assert!(!list.contains(&10));
        assert_eq!(list, list.clone());
    }

    #[test]
    fn clear_resets() {
        let mut list = list_of(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.nodes.len(), 2);

        list.add(5);
        assert_eq!(list.values(), [5]);
        assert_links_consistent(&list);
    }
}
