use std::iter::FusedIterator;

use super::{HEAD, LinkedList, TAIL};


/// Borrowing iterator over the entries of a [`LinkedList`], front to back.
#[derive(Debug)]
pub struct Iter<'a, T> {
    list:      &'a LinkedList<T>,
    front:     usize,
    back:      usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    #[must_use]
    pub(super) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            list,
            front:     list.nodes.get(HEAD).map_or(TAIL, |head| head.next),
            back:      list.nodes.get(TAIL).map_or(HEAD, |tail| tail.prev),
            remaining: list.len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.nodes.get(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.nodes.get(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        node.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item     = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}


/// Owning iterator over the entries of a [`LinkedList`], front to back.
#[derive(Debug)]
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.remove_head().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.remove_tail().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item     = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn both_ends_meet() {
        let list: LinkedList<u8> = (1..=5).collect();
        let mut iter = list.iter();

        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iteration_is_restartable() {
        let list: LinkedList<u8> = (1..=3).collect();
        let sum: u8 = list.iter().sum();
        let again: u8 = (&list).into_iter().sum();
        assert_eq!(sum, again);
    }

    #[test]
    fn into_iter_from_both_ends() {
        let list: LinkedList<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
        let mut iter = list.into_iter();

        assert_eq!(iter.next_back().as_deref(), Some("c"));
        assert_eq!(iter.collect::<Vec<_>>(), ["a", "b"]);
    }
}
