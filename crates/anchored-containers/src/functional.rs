//! `map`, `filter`, and `reduce` over any [`Collection`], visiting entries in the order of
//! [`Collection::iter`].
//!
//! The concurrent counterparts are methods of [`Synchronized`], which hold the read lock for the
//! whole traversal.
//!
//! [`Synchronized`]: crate::Synchronized

use crate::interface::Collection;


/// Apply `mapper` to each entry, collecting the results into any [`FromIterator`] target, such
/// as an [`ArrayList`] or a [`LinkedList`].
///
/// [`ArrayList`]: crate::ArrayList
/// [`LinkedList`]: crate::LinkedList
#[inline]
pub fn map<C, V, F, Out>(collection: &C, mapper: F) -> Out
where
    C:   Collection + ?Sized,
    F:   FnMut(&C::Item) -> V,
    Out: FromIterator<V>,
{
    collection.iter().map(mapper).collect()
}

/// Collect copies of the entries which satisfy `predicate`.
#[inline]
pub fn filter<C, P, Out>(collection: &C, mut predicate: P) -> Out
where
    C:        Collection + ?Sized,
    C::Item:  Clone,
    P:        FnMut(&C::Item) -> bool,
    Out:      FromIterator<C::Item>,
{
    collection
        .iter()
        .filter(|&value| predicate(value))
        .cloned()
        .collect()
}

/// Fold the entries into an accumulator, starting from `initial`.
#[inline]
pub fn reduce<C, A, F>(collection: &C, initial: A, reducer: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    collection.iter().fold(initial, reducer)
}
