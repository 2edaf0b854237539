use crate::period::TimePeriod;

/// An indexable collection of intervals that can compare its elements
/// by start, swap them, and tell whether one interval ends before
/// another starts.
///
/// This is everything [`check_overlap`](crate::check_overlap) needs
/// to know about a collection; it never looks at the intervals
/// themselves.
pub trait SortableIntervals {
    /// Number of intervals in the collection.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the interval at `i` starts strictly before
    /// the interval at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Swaps the intervals at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Returns `true` if the interval at `i` ends before the interval
    /// at `j` starts, where `i < j`.
    fn ends_before_start(&self, i: usize, j: usize) -> bool;
}

// Periods are half-open, so a period ending exactly where the next
// one starts does not overlap it.
impl<P> SortableIntervals for [P]
where
    P: TimePeriod,
{
    fn len(&self) -> usize {
        <[P]>::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i].period_start() < self[j].period_start()
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[P]>::swap(self, i, j)
    }

    fn ends_before_start(&self, i: usize, j: usize) -> bool {
        self[i].period_end() <= self[j].period_start()
    }
}
