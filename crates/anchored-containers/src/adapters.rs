use crate::{interface::{Collection, Membership, PriorityCollection}, list::{Iter, LinkedList}};
use crate::error::Result;


/// A last-in, first-out stack over a [`LinkedList`].
///
/// As a [`PriorityCollection`], `offer` pushes and `poll` pops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { list: LinkedList::new() }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        self.list.add_head(value);
    }

    /// Push each of the `values` in order, so that the last one ends up on top.
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }

    /// # Errors
    /// Returns [`EmptyContainer`] if the stack is empty.
    ///
    /// [`EmptyContainer`]: crate::CollectionError::EmptyContainer
    #[inline]
    pub fn pop(&mut self) -> Result<T> {
        self.list.remove_head()
    }

    /// The entry which the next [`Stack::pop`] would return.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the stack is empty.
    ///
    /// [`EmptyContainer`]: crate::CollectionError::EmptyContainer
    #[inline]
    pub fn top(&self) -> Result<&T> {
        self.list.get_head()
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for Stack<T> {
    type Item = T;
    type Iter<'a> = Iter<'a, T> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterate from the top of the stack to the bottom.
    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.list.iter()
    }
}

impl<T> PriorityCollection for Stack<T> {
    #[inline]
    fn offer(&mut self, value: T) {
        self.push(value);
    }

    #[inline]
    fn peek(&self) -> Result<&T> {
        self.top()
    }

    #[inline]
    fn poll(&mut self) -> Result<T> {
        self.pop()
    }
}

impl<T: PartialEq> Membership for Stack<T> {
    #[inline]
    fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.push_all(iter);
        stack
    }
}


/// A first-in, first-out queue over a [`LinkedList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { list: LinkedList::new() }
    }
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection for Queue<T> {
    type Item = T;
    type Iter<'a> = Iter<'a, T> where Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterate from the front of the queue to the back.
    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.list.iter()
    }
}

impl<T> PriorityCollection for Queue<T> {
    #[inline]
    fn offer(&mut self, value: T) {
        self.list.add_tail(value);
    }

    #[inline]
    fn peek(&self) -> Result<&T> {
        self.list.get_head()
    }

    #[inline]
    fn poll(&mut self) -> Result<T> {
        self.list.remove_head()
    }
}

impl<T: PartialEq> Membership for Queue<T> {
    #[inline]
    fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.offer_all(iter);
        queue
    }
}

impl<T> From<LinkedList<T>> for Queue<T> {
    /// The head of the list becomes the front of the queue.
    #[inline]
    fn from(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> From<Queue<T>> for LinkedList<T> {
    #[inline]
    fn from(queue: Queue<T>) -> Self {
        queue.list
    }
}
