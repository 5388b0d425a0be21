use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::slice::Iter as SliceIter;

use crate::{array::ArrayList, comparator::Comparator};
use crate::error::{CollectionError, Result};
use crate::interface::{Collection, Membership, PriorityCollection, Sequence as _};


/// A binary min-heap over a caller-supplied [`Comparator`], stored in an [`ArrayList`].
///
/// The entry at index `i` has children at `2i + 1` and `2i + 2`. For every entry other than the
/// root, `cmp(parent, entry)` is never [`Greater`], so [`peek`] and [`poll`] always serve a
/// minimum under the comparator. Wrap the comparator in [`Reversed`] for a max-heap.
///
/// There is no removal by value; entries leave the heap only in priority order.
///
/// [`Greater`]: std::cmp::Ordering::Greater
/// [`peek`]: PriorityCollection::peek
/// [`poll`]: PriorityCollection::poll
/// [`Reversed`]: crate::Reversed
#[derive(Clone)]
pub struct PriorityQueue<T, C> {
    heap: ArrayList<T>,
    cmp:  C,
}

impl<T, C> PriorityQueue<T, C> {
    #[inline]
    #[must_use]
    pub const fn new(cmp: C) -> Self {
        Self {
            heap: ArrayList::new(),
            cmp,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_capacity(cmp: C, capacity: usize) -> Self {
        Self {
            heap: ArrayList::with_capacity(capacity),
            cmp,
        }
    }

    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The entries in heap order, which is the order of [`Collection::iter`].
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Poll every entry, returning them in ascending order under the comparator.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Ok(value) = self.poll() {
            sorted.push(value);
        }
        sorted
    }

    /// Move the entry at `index` toward the root until its parent is not greater than it.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap.compare(parent, index, &self.cmp).is_le() {
                break;
            }
            self.heap.swap(parent, index);
            index = parent;
        }
    }

    /// Move the root toward the leaves until neither child is strictly less than it.
    ///
    /// Between two children which compare as equal, the left one is chosen.
    fn sift_down_root(&mut self) {
        let len = self.heap.len();
        let mut index = 0;

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            let child = if right < len && self.heap.compare(right, left, &self.cmp).is_lt() {
                right
            } else {
                left
            };

            if self.heap.compare(child, index, &self.cmp).is_lt() {
                self.heap.swap(child, index);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Default> Default for PriorityQueue<T, C> {
    #[inline]
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: Debug, C> Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap.as_slice())
            .finish_non_exhaustive()
    }
}

impl<T, C> Collection for PriorityQueue<T, C> {
    type Item = T;
    type Iter<'a> = SliceIter<'a, T> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.heap.clear();
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.heap.iter()
    }
}

impl<T, C: Comparator<T>> PriorityCollection for PriorityQueue<T, C> {
    fn offer(&mut self, value: T) {
        self.heap.add(value);
        self.sift_up(self.heap.len() - 1);
    }

    fn offer_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        self.heap.reserve(values.size_hint().0);
        for value in values {
            self.offer(value);
        }
    }

    #[inline]
    fn peek(&self) -> Result<&T> {
        self.heap.as_slice().first().ok_or(CollectionError::EmptyContainer)
    }

    fn poll(&mut self) -> Result<T> {
        let last = self.heap.pop_last().ok_or(CollectionError::EmptyContainer)?;

        if self.heap.is_empty() {
            return Ok(last);
        }

        let root = self.heap.set_at(0, last)?;
        self.sift_down_root();
        Ok(root)
    }
}

impl<T: PartialEq, C> Membership for PriorityQueue<T, C> {
    /// A linear scan using `T`'s equality, not the comparator.
    #[inline]
    fn contains(&self, value: &T) -> bool {
        self.heap.as_slice().contains(value)
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.offer_all(iter);
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::default();
        queue.offer_all(iter);
        queue
    }
}
