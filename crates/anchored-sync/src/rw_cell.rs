use std::cell::{Ref, RefCell, RefMut};
use std::ops::{Deref, DerefMut};


/// An abstraction over types which resemble `RefCell<T>` or `RwLock<T>`.
///
/// Any number of [`read`] guards may coexist, but a [`write`] guard is exclusive.
///
/// # Panics or Deadlocks
/// Acquiring a [`write`] guard while the same thread holds any guard of the same cell will
/// panic (for `RefCell`) or deadlock (for `RwLock`). Callers that hold two cells at once
/// must always acquire them in a consistent order.
///
/// [`read`]: RwCell::read
/// [`write`]: RwCell::write
pub trait RwCell<T> {
    /// Shared access to the inner `T`.
    type Ref<'a>:    Deref<Target = T> where Self: 'a;
    /// Exclusive access to the inner `T`.
    type RefMut<'a>: DerefMut<Target = T> where Self: 'a;

    /// Create a new cell that owns the provided `T`.
    #[must_use]
    fn new_rw_cell(t: T) -> Self;

    /// Retrieve the inner `T` from the cell.
    #[must_use]
    fn into_inner(self) -> T;

    /// Get shared access to the inner `T`, blocking while a writer holds the cell.
    #[must_use]
    fn read(&self) -> Self::Ref<'_>;

    /// Get exclusive access to the inner `T`, blocking while any reader or writer holds the
    /// cell.
    #[must_use]
    fn write(&self) -> Self::RefMut<'_>;
}

impl<T> RwCell<T> for RefCell<T> {
    type Ref<'a>    = Ref<'a, T> where Self: 'a;
    type RefMut<'a> = RefMut<'a, T> where Self: 'a;

    #[inline]
    fn new_rw_cell(t: T) -> Self {
        Self::new(t)
    }

    #[inline]
    fn into_inner(self) -> T {
        #[expect(clippy::use_self, reason = "distinction from `RwCell::into_inner`")]
        RefCell::into_inner(self)
    }

    #[inline]
    fn read(&self) -> Self::Ref<'_> {
        self.borrow()
    }

    #[inline]
    fn write(&self) -> Self::RefMut<'_> {
        self.borrow_mut()
    }
}
