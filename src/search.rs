use core::ops::Range;

use crate::period::TimePeriod;

/// Returns the indices (as a half-open range) of all `periods`
/// overlapping `range`.
///
/// `periods` must be sorted by start and must not overlap each other;
/// see [`check_overlap`](crate::check_overlap). This is not checked
/// here, and if it doesn't hold then the result is meaningless
/// (though never out of bounds).
///
/// If no period overlaps `range`, then the empty range `0..0` is
/// returned regardless of where the query falls.
///
/// Note that the periods at either edge of the result may start before
/// or end after `range`. Use [`truncate_period`](crate::truncate_period)
/// to clip them.
pub fn periods_overlap_range<P, R>(periods: &[P], range: &R) -> Range<usize>
where
    P: TimePeriod,
    R: TimePeriod<Instant = P::Instant> + ?Sized,
{
    let (range_start, range_end) = (range.period_start(), range.period_end());

    // Overlap itself is not monotonic over the index (it goes false,
    // true, false), but each half of it is: ends and starts both
    // increase along a sorted, disjoint slice.
    //
    // First period that ends after the range starts.
    let i = periods.partition_point(|p| p.period_end() <= range_start);
    if i == periods.len() {
        log::trace!("no period ends after the start of the range");
        return 0..0;
    }

    // Of the remainder, first period that starts at or after the range ends.
    let j = i + periods[i..].partition_point(|p| p.period_start() < range_end);
    if i == j {
        log::trace!("range ends before period [{}] starts", i);
        return 0..0;
    }

    log::trace!("periods [{}..{}) overlap range", i, j);
    i..j
}
