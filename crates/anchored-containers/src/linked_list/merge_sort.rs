use std::cmp::Ordering;

use crate::comparator::Comparator;
use super::{HEAD, LinkedList, TAIL};


// Throughout the sort, only `next` links are maintained, and `TAIL` terminates each run.
// `HEAD.next` doubles as the scratch link a merge builds its output from.
impl<T> LinkedList<T> {
    /// Sort the run starting at `first`, returning the first slot of the sorted run.
    ///
    /// Recursion depth is logarithmic in the length of the run.
    pub(super) fn merge_sort<C: Comparator<T> + ?Sized>(&mut self, first: usize, cmp: &C) -> usize {
        if first == TAIL || self.nodes[first].next == TAIL {
            return first;
        }

        let second_half = self.split_after_middle(first);
        let left = self.merge_sort(first, cmp);
        let right = self.merge_sort(second_half, cmp);
        self.merge_runs(left, right, cmp)
    }

    /// Terminate the run starting at `first` after its middle, and return the first slot of the
    /// second half. The run must hold at least two entries.
    fn split_after_middle(&mut self, first: usize) -> usize {
        let mut slow = first;
        let mut fast = self.nodes[first].next;

        while fast != TAIL && self.nodes[fast].next != TAIL {
            slow = self.nodes[slow].next;
            fast = self.nodes[self.nodes[fast].next].next;
        }

        let second_half = self.nodes[slow].next;
        self.nodes[slow].next = TAIL;
        second_half
    }

    /// Merge two sorted runs. Ties are taken from `left` first, which keeps the sort stable.
    fn merge_runs<C: Comparator<T> + ?Sized>(
        &mut self,
        mut left:  usize,
        mut right: usize,
        cmp:       &C,
    ) -> usize {
        let mut last = HEAD;

        while left != TAIL && right != TAIL {
            if self.compare_slots(left, right, cmp).is_le() {
                self.nodes[last].next = left;
                last = left;
                left = self.nodes[left].next;
            } else {
                self.nodes[last].next = right;
                last = right;
                right = self.nodes[right].next;
            }
        }

        self.nodes[last].next = if left == TAIL { right } else { left };
        self.nodes[HEAD].next
    }

    fn compare_slots<C: Comparator<T> + ?Sized>(&self, lhs: usize, rhs: usize, cmp: &C) -> Ordering {
        match (&self.nodes[lhs].value, &self.nodes[rhs].value) {
            (Some(lhs), Some(rhs)) => cmp.cmp(lhs, rhs),
            // Sentinels never reach a merge.
            _ => Ordering::Equal,
        }
    }

    /// Rebuild every `prev` link from the `next` links, starting at `HEAD`.
    pub(super) fn relink_backward(&mut self) {
        let mut prev = HEAD;
        let mut slot = self.nodes[HEAD].next;

        while slot != TAIL {
            self.nodes[slot].prev = prev;
            prev = slot;
            slot = self.nodes[slot].next;
        }

        self.nodes[TAIL].prev = prev;
    }
}
