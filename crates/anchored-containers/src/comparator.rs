use std::cmp::Ordering;


/// A total preorder over `T`, used by every ordering-sensitive container in this crate.
///
/// `Ordering::Less` means that `lhs` should be served (or stored) before `rhs`.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a `Comparator`. Note that a closure's argument types
/// usually need to be annotated, e.g. `|lhs: &u32, rhs: &u32| rhs.cmp(lhs)`.
///
/// Implementations must be consistent (reflexive, transitive, and antisymmetric in the sense of
/// [`Ordering`]). Containers do not validate this, and an inconsistent comparator silently
/// corrupts the shape of a heap or tree, though never memory safety.
pub trait Comparator<T: ?Sized> {
    /// Compare two values.
    #[must_use]
    fn cmp(&self, lhs: &T, rhs: &T) -> Ordering;
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    #[inline]
    fn cmp(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

/// A [`Comparator`] which uses the [`Ord`] implementation of `T`, producing ascending order
/// (a min-heap, or a tree whose minimum is polled first).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrdComparator;

impl<T: ?Sized + Ord> Comparator<T> for OrdComparator {
    /// Equivalent to `Ord::cmp(lhs, rhs)`.
    #[inline]
    fn cmp(&self, lhs: &T, rhs: &T) -> Ordering {
        Ord::cmp(lhs, rhs)
    }
}

/// Inverts the wrapped [`Comparator`].
///
/// `Reversed(OrdComparator)` turns a min-heap into a max-heap.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn cmp(&self, lhs: &T, rhs: &T) -> Ordering {
        self.0.cmp(rhs, lhs)
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn ord_and_reversed() {
        assert_eq!(OrdComparator.cmp(&1, &2), Ordering::Less);
        assert_eq!(OrdComparator.cmp("b", "a"), Ordering::Greater);
        assert_eq!(Reversed(OrdComparator).cmp(&1, &2), Ordering::Greater);
        assert_eq!(Reversed(Reversed(OrdComparator)).cmp(&1, &2), Ordering::Less);
    }

    #[test]
    fn closures_are_comparators() {
        let by_len = |lhs: &&str, rhs: &&str| lhs.len().cmp(&rhs.len());

        assert_eq!(Comparator::cmp(&by_len, &"aaa", &"b"), Ordering::Greater);
        assert_eq!(Reversed(by_len).cmp(&"aaa", &"b"), Ordering::Less);
    }
}
