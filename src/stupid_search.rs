use core::ops::Range;

use crate::period::{in_range, TimePeriod};

// A simple but slow version of `periods_overlap_range`
// for testing.
//
// Looks at every single period, so it doesn't care whether
// they are sorted. It does assume the overlapping ones are
// contiguous, which holds for anything `check_overlap` accepts.
pub fn stupid_periods_overlap_range<P, R>(periods: &[P], range: &R) -> Range<usize>
where
    P: TimePeriod,
    R: TimePeriod<Instant = P::Instant>,
{
    let mut overlapping = periods
        .iter()
        .enumerate()
        .filter(|(_, period)| in_range(*period, range))
        .map(|(index, _)| index);
    match overlapping.next() {
        Some(first) => first..overlapping.last().unwrap_or(first) + 1,
        None => 0..0,
    }
}
