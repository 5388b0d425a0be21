use crate::{comparator::Comparator, error::Result};


/// The operations shared by every container in this crate.
pub trait Collection {
    type Item;
    type Iter<'a>: Iterator<Item = &'a Self::Item> where Self: 'a;

    /// The number of entries in the container.
    #[must_use]
    fn len(&self) -> usize;

    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry from the container.
    fn clear(&mut self);

    /// Iterate over the container's entries in its canonical order: insertion order for
    /// sequences, and ascending comparator order for binary search trees.
    ///
    /// A binary heap iterates in its internal array order, in which only the first entry is
    /// guaranteed to be its minimum.
    fn iter(&self) -> Self::Iter<'_>;

    /// Copy the container's entries, in the order of [`Collection::iter`], into a new `Vec`.
    #[must_use]
    fn values(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// An index-addressable container whose order is chosen by the caller.
pub trait Sequence: Collection + Sized {
    /// Append `value` to the end of the sequence.
    fn add(&mut self, value: Self::Item);

    /// Append each of the `values`, in iteration order.
    fn add_all<I: IntoIterator<Item = Self::Item>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }

    /// Insert `value` so that it ends up at `index`, shifting later entries back by one.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is greater than `self.len()`, unless the
    /// implementation documents that it clamps `index` instead.
    ///
    /// [`IndexOutOfRange`]: crate::CollectionError::IndexOutOfRange
    fn insert_at(&mut self, index: usize, value: Self::Item) -> Result<()>;

    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is not less than `self.len()`.
    ///
    /// [`IndexOutOfRange`]: crate::CollectionError::IndexOutOfRange
    fn get(&self, index: usize) -> Result<&Self::Item>;

    /// Remove and return the entry at `index`, shifting later entries forward by one.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is not less than `self.len()`.
    ///
    /// [`IndexOutOfRange`]: crate::CollectionError::IndexOutOfRange
    fn remove_at(&mut self, index: usize) -> Result<Self::Item>;

    /// Reverse the order of the sequence in place.
    fn reverse(&mut self);

    /// Sort the sequence in place, in ascending order according to `cmp`.
    ///
    /// The sort is stable: entries which compare as equal keep their relative order.
    fn sort_by<C: Comparator<Self::Item> + ?Sized>(&mut self, cmp: &C);

    /// Append a copy of each entry of `other`, in order. `other` is not modified.
    fn merge(&mut self, other: &Self)
    where
        Self::Item: Clone,
    {
        self.add_all(other.iter().cloned());
    }

    /// Create a new sequence holding copies of the entries which satisfy `predicate`, in their
    /// original order.
    #[must_use]
    fn filter<P: FnMut(&Self::Item) -> bool>(&self, predicate: P) -> Self
    where
        Self::Item: Clone;
}

/// A container which serves its entries in a fixed order, one at a time.
///
/// Binary heaps and binary search trees serve their minimum entry according to their comparator,
/// a [`Stack`] serves its most recently offered entry, and a [`Queue`] serves its least recently
/// offered entry.
///
/// [`Stack`]: crate::Stack
/// [`Queue`]: crate::Queue
pub trait PriorityCollection: Collection {
    /// Add `value` to the container.
    fn offer(&mut self, value: Self::Item);

    /// Offer each of the `values`, in iteration order.
    fn offer_all<I: IntoIterator<Item = Self::Item>>(&mut self, values: I)
    where
        Self: Sized,
    {
        for value in values {
            self.offer(value);
        }
    }

    /// Get the entry which would be returned by the next call to [`poll`].
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the container is empty.
    ///
    /// [`poll`]: PriorityCollection::poll
    /// [`EmptyContainer`]: crate::CollectionError::EmptyContainer
    fn peek(&self) -> Result<&Self::Item>;

    /// Remove and return the next entry.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the container is empty.
    ///
    /// [`EmptyContainer`]: crate::CollectionError::EmptyContainer
    fn poll(&mut self) -> Result<Self::Item>;
}

/// Membership queries, either by equality or, for ordered containers, by their comparator.
pub trait Membership: Collection {
    #[must_use]
    fn contains(&self, value: &Self::Item) -> bool;
}
