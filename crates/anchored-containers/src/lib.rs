#![cfg_attr(test, allow(unused_crate_dependencies, reason = "`loom` is only used by integration tests"))]

//! Array lists, doubly linked lists, binary heaps, and binary search trees, together with a
//! generic reader/writer-locked wrapper which makes any of them shareable across threads.
//!
//! Most of the shared container operations are provided by the traits in [`prelude`]:
//! [`Collection`], [`Sequence`], [`PriorityCollection`], and [`Membership`].

mod comparator;
mod error;
mod interface;

mod array;
mod heap;
mod linked_list;
mod tree;

mod adapters;
mod synchronized;

pub mod functional;


pub mod list {
    pub use crate::linked_list::{IntoIter, Iter, LinkedList};
}

pub mod binary_tree {
    #[expect(clippy::module_name_repetitions, reason = "distinguish container type")]
    pub use crate::tree::{BinaryTree, Iter};
}

pub mod concurrent {
    pub use crate::synchronized::{
        ConcurrentArrayList, ConcurrentBinaryTree, ConcurrentLinkedList,
        ConcurrentPriorityQueue, ConcurrentQueue, ConcurrentStack, Synchronized,
    };
}

/// Glob-import this module to bring the container traits into scope.
pub mod prelude {
    pub use crate::comparator::Comparator;
    pub use crate::interface::{Collection, Membership, PriorityCollection, Sequence};
}


pub use self::{
    adapters::{Queue, Stack},
    array::ArrayList,
    binary_tree::BinaryTree,
    comparator::{Comparator, OrdComparator, Reversed},
    concurrent::Synchronized,
    error::{CollectionError, Result},
    heap::PriorityQueue,
    interface::{Collection, Membership, PriorityCollection, Sequence},
    list::LinkedList,
};
