use std::{cmp::Ordering, mem};
use std::slice::Iter as SliceIter;
use std::vec::IntoIter as VecIntoIter;

use crate::{comparator::Comparator, interface::{Collection, Membership, Sequence}};
use crate::error::{CollectionError, Result};


/// A growable, contiguous sequence. Valid indices are `0..len`.
///
/// Also used as the backing storage of [`PriorityQueue`], which drives it through
/// [`ArrayList::compare`] and [`ArrayList::swap`].
///
/// [`PriorityQueue`]: crate::PriorityQueue
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayList<T> {
    entries: Vec<T>,
}

impl<T> ArrayList<T> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.entries
    }

    /// Replace the entry at `index` with `value`, returning the previous entry.
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] if `index` is not less than the length.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.entries.len();
        let slot = self.entries
            .get_mut(index)
            .ok_or(CollectionError::IndexOutOfRange { index, len })?;
        Ok(mem::replace(slot, value))
    }

    /// Swap the entries at indices `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds, like [`slice::swap`].
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
    }

    /// Compare the entries at indices `i` and `j` with `cmp`, without moving either of them.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    #[must_use]
    #[expect(clippy::indexing_slicing, reason = "documented panic, like `slice::swap`")]
    pub fn compare<C: Comparator<T> + ?Sized>(&self, i: usize, j: usize, cmp: &C) -> Ordering {
        cmp.cmp(&self.entries[i], &self.entries[j])
    }

    /// Remove and return the last entry, if any.
    #[inline]
    pub fn pop_last(&mut self) -> Option<T> {
        self.entries.pop()
    }
}

impl<T> Default for ArrayList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for ArrayList<T> {
    type Item = T;
    type Iter<'a> = SliceIter<'a, T> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.entries.iter()
    }
}

impl<T> Sequence for ArrayList<T> {
    #[inline]
    fn add(&mut self, value: T) {
        self.entries.push(value);
    }

    #[inline]
    fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.entries.extend(values);
    }

    fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        CollectionError::check_insertion_index(index, self.entries.len())?;
        self.entries.insert(index, value);
        Ok(())
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        let len = self.entries.len();
        self.entries.get(index).ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        CollectionError::check_index(index, self.entries.len())?;
        Ok(self.entries.remove(index))
    }

    #[inline]
    fn reverse(&mut self) {
        self.entries.reverse();
    }

    fn sort_by<C: Comparator<T> + ?Sized>(&mut self, cmp: &C) {
        self.entries.sort_by(|lhs, rhs| cmp.cmp(lhs, rhs));
    }

    fn merge(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.entries.extend_from_slice(&other.entries);
    }

    fn filter<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Self
    where
        T: Clone,
    {
        self.entries
            .iter()
            .filter(|&value| predicate(value))
            .cloned()
            .collect()
    }
}

impl<T: PartialEq> Membership for ArrayList<T> {
    #[inline]
    fn contains(&self, value: &T) -> bool {
        self.entries.contains(value)
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    #[inline]
    fn from(entries: Vec<T>) -> Self {
        Self { entries }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { entries: Vec::from_iter(iter) }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item     = T;
    type IntoIter = VecIntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item     = &'a T;
    type IntoIter = SliceIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
