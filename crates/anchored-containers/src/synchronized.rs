use std::{marker::PhantomData, ptr};
use std::fmt::{Debug, Formatter, Result as FmtResult};

use tracing::{event, Level};

use anchored_sync::{RwCell, RwLock};

use crate::{Queue, Stack};
use crate::{
    array::ArrayList,
    comparator::{Comparator, OrdComparator},
    error::Result,
    functional,
    heap::PriorityQueue,
    interface::{Collection, Membership, PriorityCollection, Sequence},
    linked_list::LinkedList,
    tree::BinaryTree,
};


pub type ConcurrentArrayList<T>                       = Synchronized<ArrayList<T>>;
pub type ConcurrentLinkedList<T>                      = Synchronized<LinkedList<T>>;
pub type ConcurrentPriorityQueue<T, C = OrdComparator> = Synchronized<PriorityQueue<T, C>>;
pub type ConcurrentBinaryTree<T, C = OrdComparator>    = Synchronized<BinaryTree<T, C>>;
pub type ConcurrentStack<T>                           = Synchronized<Stack<T>>;
pub type ConcurrentQueue<T>                           = Synchronized<Queue<T>>;


/// Wraps any container of this crate in a reader/writer lock, so that it can be shared across
/// threads.
///
/// Every method takes `&self`. Reads (such as `len`, `get`, `peek`, and `contains`) take the shared
/// lock, while mutations take the exclusive lock for the full duration of the call. Entries leave
/// the lock by being cloned.
///
/// The lock is an [`anchored_sync::RwLock`] by default; any other [`RwCell`], such as a
/// [`RefCell`], may be used instead.
///
/// Beware that callbacks given to methods like [`Synchronized::map`] or [`Synchronized::with_read`]
/// run while the lock is held, and must not access the same `Synchronized` container mutably.
///
/// [`RefCell`]: std::cell::RefCell
pub struct Synchronized<C, Cell = RwLock<C>> {
    cell:      Cell,
    container: PhantomData<C>,
}

impl<C, Cell: RwCell<C>> Synchronized<C, Cell> {
    #[inline]
    #[must_use]
    pub fn new(container: C) -> Self {
        Self {
            cell:      Cell::new_rw_cell(container),
            container: PhantomData,
        }
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> C {
        self.cell.into_inner()
    }

    /// Run `f` on the container while holding the shared lock.
    #[inline]
    pub fn with_read<R, F: FnOnce(&C) -> R>(&self, f: F) -> R {
        f(&*self.cell.read())
    }

    /// Run `f` on the container while holding the exclusive lock, which makes compound operations
    /// atomic.
    #[inline]
    pub fn with_write<R, F: FnOnce(&mut C) -> R>(&self, f: F) -> R {
        f(&mut *self.cell.write())
    }

    /// Copy the container out of the lock.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> C
    where
        C: Clone,
    {
        self.cell.read().clone()
    }
}

impl<C: Collection, Cell: RwCell<C>> Synchronized<C, Cell> {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cell.read().len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cell.read().is_empty()
    }

    #[inline]
    pub fn clear(&self) {
        self.cell.write().clear();
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> Vec<C::Item>
    where
        C::Item: Clone,
    {
        self.cell.read().values()
    }

    /// Visit each entry, in the order of [`Collection::iter`], while holding the shared lock.
    pub fn for_each<F: FnMut(&C::Item)>(&self, f: F) {
        self.cell.read().iter().for_each(f);
    }

    /// See [`functional::map`]. The shared lock is held for the whole traversal.
    pub fn map<V, F, Out>(&self, mapper: F) -> Out
    where
        F:   FnMut(&C::Item) -> V,
        Out: FromIterator<V>,
    {
        functional::map(&*self.cell.read(), mapper)
    }

    /// See [`functional::reduce`]. The shared lock is held for the whole traversal.
    pub fn reduce<A, F>(&self, initial: A, reducer: F) -> A
    where
        F: FnMut(A, &C::Item) -> A,
    {
        functional::reduce(&*self.cell.read(), initial, reducer)
    }
}

impl<C: Membership, Cell: RwCell<C>> Synchronized<C, Cell> {
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &C::Item) -> bool {
        self.cell.read().contains(value)
    }
}

impl<C: Sequence, Cell: RwCell<C>> Synchronized<C, Cell> {
    #[inline]
    pub fn add(&self, value: C::Item) {
        self.cell.write().add(value);
    }

    /// Append each of the `values` under a single acquisition of the exclusive lock.
    #[inline]
    pub fn add_all<I: IntoIterator<Item = C::Item>>(&self, values: I) {
        self.cell.write().add_all(values);
    }

    /// See [`Sequence::insert_at`].
    ///
    /// # Errors
    /// Propagates the container's error, in which case the container is unchanged.
    #[inline]
    pub fn insert_at(&self, index: usize, value: C::Item) -> Result<()> {
        self.cell.write().insert_at(index, value)
    }

    /// Get a copy of the entry at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is not less than the container's length.
    ///
    /// [`IndexOutOfRange`]: crate::CollectionError::IndexOutOfRange
    #[inline]
    pub fn get(&self, index: usize) -> Result<C::Item>
    where
        C::Item: Clone,
    {
        self.cell.read().get(index).cloned()
    }

    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index` is not less than the container's length.
    ///
    /// [`IndexOutOfRange`]: crate::CollectionError::IndexOutOfRange
    #[inline]
    pub fn remove_at(&self, index: usize) -> Result<C::Item> {
        self.cell.write().remove_at(index)
    }

    #[inline]
    pub fn reverse(&self) {
        self.cell.write().reverse();
    }

    #[inline]
    pub fn sort_by<Cmp: Comparator<C::Item> + ?Sized>(&self, cmp: &Cmp) {
        self.cell.write().sort_by(cmp);
    }

    /// Append a copy of each entry of `other`, holding both locks for the whole operation.
    ///
    /// The two locks are always acquired in the order of the containers' addresses, so concurrent
    /// merges in opposite directions cannot deadlock. Merging a container into itself appends a
    /// copy of its own entries.
    pub fn merge(&self, other: &Self)
    where
        C::Item: Clone,
    {
        if ptr::eq(self, other) {
            event!(Level::DEBUG, "merging a synchronized container into itself");
            let mut this = self.cell.write();
            let copies: Vec<C::Item> = this.values();
            this.add_all(copies);
            return;
        }

        if ptr::from_ref(self) < ptr::from_ref(other) {
            let mut destination = self.cell.write();
            let source = other.cell.read();
            destination.merge(&*source);
        } else {
            let source = other.cell.read();
            let mut destination = self.cell.write();
            destination.merge(&*source);
        }
    }

    /// Append a copy of each entry of an unwrapped container.
    #[inline]
    pub fn merge_from(&self, other: &C)
    where
        C::Item: Clone,
    {
        self.cell.write().merge(other);
    }

    /// See [`Sequence::filter`]. The shared lock is held for the whole traversal.
    #[must_use]
    pub fn filter<P: FnMut(&C::Item) -> bool>(&self, predicate: P) -> C
    where
        C::Item: Clone,
    {
        self.cell.read().filter(predicate)
    }
}

impl<C: PriorityCollection, Cell: RwCell<C>> Synchronized<C, Cell> {
    #[inline]
    pub fn offer(&self, value: C::Item) {
        self.cell.write().offer(value);
    }

    /// Offer each of the `values` under a single acquisition of the exclusive lock.
    #[inline]
    pub fn offer_all<I: IntoIterator<Item = C::Item>>(&self, values: I) {
        self.cell.write().offer_all(values);
    }

    /// Get a copy of the entry which the next [`Synchronized::poll`] would return, if no other
    /// thread polls first.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the container is empty.
    ///
    /// [`EmptyContainer`]: crate::CollectionError::EmptyContainer
    #[inline]
    pub fn peek(&self) -> Result<C::Item>
    where
        C::Item: Clone,
    {
        self.cell.read().peek().cloned()
    }

    /// # Errors
    /// Returns [`EmptyContainer`] if the container is empty.
    ///
    /// [`EmptyContainer`]: crate::CollectionError::EmptyContainer
    #[inline]
    pub fn poll(&self) -> Result<C::Item> {
        self.cell.write().poll()
    }
}

impl<T, Cell: RwCell<LinkedList<T>>> Synchronized<LinkedList<T>, Cell> {
    #[inline]
    pub fn add_head(&self, value: T) {
        self.cell.write().add_head(value);
    }

    #[inline]
    pub fn add_tail(&self, value: T) {
        self.cell.write().add_tail(value);
    }

    /// # Errors
    /// Returns [`EmptyContainer`] if the list is empty.
    ///
    /// [`EmptyContainer`]: crate::CollectionError::EmptyContainer
    #[inline]
    pub fn get_head(&self) -> Result<T>
    where
        T: Clone,
    {
        self.cell.read().get_head().cloned()
    }

    /// # Errors
    /// Returns [`EmptyContainer`] if the list is empty.
    ///
    /// [`EmptyContainer`]: crate::CollectionError::EmptyContainer
    #[inline]
    pub fn get_tail(&self) -> Result<T>
    where
        T: Clone,
    {
        self.cell.read().get_tail().cloned()
    }

    /// # Errors
    /// Returns [`EmptyContainer`] if the list is empty.
    ///
    /// [`EmptyContainer`]: crate::CollectionError::EmptyContainer
    #[inline]
    pub fn remove_head(&self) -> Result<T> {
        self.cell.write().remove_head()
    }

    /// # Errors
    /// Returns [`EmptyContainer`] if the list is empty.
    ///
    /// [`EmptyContainer`]: crate::CollectionError::EmptyContainer
    #[inline]
    pub fn remove_tail(&self) -> Result<T> {
        self.cell.write().remove_tail()
    }

    #[inline]
    pub fn merge_array(&self, array: &ArrayList<T>)
    where
        T: Clone,
    {
        self.cell.write().merge_array(array);
    }
}

impl<T, Cmp, Cell> Synchronized<BinaryTree<T, Cmp>, Cell>
where
    Cmp:  Comparator<T>,
    Cell: RwCell<BinaryTree<T, Cmp>>,
{
    /// See [`BinaryTree::remove`].
    #[inline]
    pub fn remove(&self, value: &T) -> bool {
        self.cell.write().remove(value)
    }
}

impl<T, Cell: RwCell<Stack<T>>> Synchronized<Stack<T>, Cell> {
    #[inline]
    pub fn push(&self, value: T) {
        self.cell.write().push(value);
    }

    #[inline]
    pub fn push_all<I: IntoIterator<Item = T>>(&self, values: I) {
        self.cell.write().push_all(values);
    }

    /// # Errors
    /// Returns [`EmptyContainer`] if the stack is empty.
    ///
    /// [`EmptyContainer`]: crate::CollectionError::EmptyContainer
    #[inline]
    pub fn pop(&self) -> Result<T> {
        self.cell.write().pop()
    }
}

impl<C: Clone, Cell: RwCell<C>> Clone for Synchronized<C, Cell> {
    /// Copy the container under the shared lock, into a new and independently locked wrapper.
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.snapshot())
    }
}

impl<C: Default, Cell: RwCell<C>> Default for Synchronized<C, Cell> {
    #[inline]
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C, Cell: RwCell<C>> From<C> for Synchronized<C, Cell> {
    #[inline]
    fn from(container: C) -> Self {
        Self::new(container)
    }
}

impl<C: Debug, Cell: RwCell<C>> Debug for Synchronized<C, Cell> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Synchronized")
            .field(&*self.cell.read())
            .finish()
    }
}
