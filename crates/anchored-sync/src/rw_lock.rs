use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::rw_cell::RwCell;

#[cfg(any(loom, not(feature = "parking_lot")))]
use std::sync::PoisonError;


cfg_if::cfg_if! {
    if #[cfg(loom)] {
        use loom::sync::RwLock as InnerRwLock;
        pub use loom::sync::{RwLockReadGuard, RwLockWriteGuard};
    } else if #[cfg(feature = "parking_lot")] {
        use parking_lot::RwLock as InnerRwLock;
        pub use parking_lot::{RwLockReadGuard, RwLockWriteGuard};
    } else {
        use std::sync::RwLock as InnerRwLock;
        pub use std::sync::{RwLockReadGuard, RwLockWriteGuard};
    }
}


/// A reader/writer lock, backed by `parking_lot` if the `parking_lot` feature is enabled,
/// by `loom` when compiled with `cfg(loom)`, and by `std` otherwise.
///
/// Poison is not exposed: a poisoned `std` lock means that another thread panicked while
/// holding the write guard, so acquiring the lock afterwards panics as well.
pub struct RwLock<T>(InnerRwLock<T>);

impl<T> RwLock<T> {
    #[inline]
    #[must_use]
    pub fn new(t: T) -> Self {
        Self(InnerRwLock::new(t))
    }
}

#[cfg(any(loom, not(feature = "parking_lot")))]
impl<T> RwCell<T> for RwLock<T> {
    type Ref<'a>    = RwLockReadGuard<'a, T> where Self: 'a;
    type RefMut<'a> = RwLockWriteGuard<'a, T> where Self: 'a;

    #[inline]
    fn new_rw_cell(t: T) -> Self {
        Self::new(t)
    }

    #[inline]
    fn into_inner(self) -> T {
        let maybe_poison: Result<_, PoisonError<_>> = self.0.into_inner();
        #[expect(clippy::unwrap_used, reason = "poison means a thread has panicked")]
        maybe_poison.unwrap()
    }

    #[inline]
    fn read(&self) -> Self::Ref<'_> {
        let maybe_poison: Result<_, PoisonError<_>> = self.0.read();
        #[expect(clippy::unwrap_used, reason = "poison means a thread has panicked")]
        maybe_poison.unwrap()
    }

    #[inline]
    fn write(&self) -> Self::RefMut<'_> {
        let maybe_poison: Result<_, PoisonError<_>> = self.0.write();
        #[expect(clippy::unwrap_used, reason = "poison means a thread has panicked")]
        maybe_poison.unwrap()
    }
}

#[cfg(all(not(loom), feature = "parking_lot"))]
impl<T> RwCell<T> for RwLock<T> {
    type Ref<'a>    = RwLockReadGuard<'a, T> where Self: 'a;
    type RefMut<'a> = RwLockWriteGuard<'a, T> where Self: 'a;

    #[inline]
    fn new_rw_cell(t: T) -> Self {
        Self::new(t)
    }

    #[inline]
    fn into_inner(self) -> T {
        self.0.into_inner()
    }

    #[inline]
    fn read(&self) -> Self::Ref<'_> {
        self.0.read()
    }

    #[inline]
    fn write(&self) -> Self::RefMut<'_> {
        self.0.write()
    }
}

impl<T: Default> Default for RwLock<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Debug for RwLock<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RwLock").finish_non_exhaustive()
    }
}
