//! Cells offering shared `read` and exclusive `write` access, so that a container can be
//! wrapped either in a real reader/writer lock (for multithreaded use) or in a `RefCell`
//! (for single-threaded use) without the wrapper knowing the difference.

mod rw_cell;
mod rw_lock;


pub use self::{rw_cell::RwCell, rw_lock::RwLock};
pub use self::rw_lock::{RwLockReadGuard, RwLockWriteGuard};
