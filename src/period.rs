use core::ops::{Range, Sub};

/// A value with a start and an end instant on a single timeline.
///
/// Periods are treated as half-open: the start is covered, the end
/// is not. The end is not required to come after the start; such
/// "reversed" periods are accepted by every function in this crate
/// without complaint, and have a negative [duration](period_duration).
///
/// Instants must be fully resolved. If your own representation has
/// an open end (e.g. `Option<DateTime<Utc>>`), map the missing end
/// to the largest instant you can represent before handing it over.
pub trait TimePeriod {
    type Instant: Ord + Clone;

    fn period_start(&self) -> Self::Instant;
    fn period_end(&self) -> Self::Instant;
}

impl<T> TimePeriod for Range<T>
where
    T: Ord + Clone,
{
    type Instant = T;

    fn period_start(&self) -> T {
        self.start.clone()
    }

    fn period_end(&self) -> T {
        self.end.clone()
    }
}

impl<P> TimePeriod for &P
where
    P: TimePeriod + ?Sized,
{
    type Instant = P::Instant;

    fn period_start(&self) -> Self::Instant {
        (**self).period_start()
    }

    fn period_end(&self) -> Self::Instant {
        (**self).period_end()
    }
}

/// Returns `true` if the intersection of `period` and `range` is not empty.
///
/// Periods that only touch at a boundary (one ends exactly where the
/// other starts) do not overlap.
pub fn in_range<P, R>(period: &P, range: &R) -> bool
where
    P: TimePeriod + ?Sized,
    R: TimePeriod<Instant = P::Instant> + ?Sized,
{
    // Negation of "ends at or before the range starts, or
    // starts at or after the range ends".
    period.period_start() < range.period_end() && period.period_end() > range.period_start()
}

/// Returns `end - start` for the given period.
///
/// This is negative (for instant types that can express it) when
/// the period ends before it starts.
pub fn period_duration<P>(period: &P) -> <P::Instant as Sub>::Output
where
    P: TimePeriod + ?Sized,
    P::Instant: Sub,
{
    period.period_end() - period.period_start()
}

/// Returns the start and end of `period` clipped to `range`.
///
/// If `period` does not overlap `range` at all then its own start
/// and end are returned unchanged.
pub fn truncate_period<P, R>(period: &P, range: &R) -> (P::Instant, P::Instant)
where
    P: TimePeriod + ?Sized,
    R: TimePeriod<Instant = P::Instant> + ?Sized,
{
    let (start, end) = (period.period_start(), period.period_end());
    if !in_range(period, range) {
        return (start, end);
    }
    (start.max(range.period_start()), end.min(range.period_end()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, month, day, hour, min, sec)
            .unwrap()
    }

    fn day(month: u32, day: u32) -> DateTime<Utc> {
        at(month, day, 0, 0, 0)
    }

    // Last instant of the day before `day(month, d)`.
    fn end_of_day_before(month: u32, d: u32) -> DateTime<Utc> {
        day(month, d) - Duration::nanoseconds(1)
    }

    //
    // `in_range` tests
    //

    fn query() -> Range<DateTime<Utc>> {
        // Beginning of January 8th until the end of January 19th.
        day(1, 8)..end_of_day_before(1, 20)
    }

    #[test]
    fn period_covering_whole_range_is_in_range() {
        assert!(in_range(&(day(1, 1)..end_of_day_before(1, 23)), &query()));
    }

    #[test]
    fn period_inside_range_is_in_range() {
        assert!(in_range(&(day(1, 9)..end_of_day_before(1, 19)), &query()));
    }

    #[test]
    fn period_sharing_start_is_in_range() {
        assert!(in_range(&(query().start..end_of_day_before(1, 19)), &query()));
    }

    #[test]
    fn period_sharing_end_is_in_range() {
        assert!(in_range(&(day(1, 9)..query().end), &query()));
    }

    #[test]
    fn period_equal_to_range_is_in_range() {
        assert!(in_range(&query(), &query()));
    }

    #[test]
    fn period_cutting_range_start_is_in_range() {
        assert!(in_range(&(day(1, 1)..at(1, 8, 4, 0, 0)), &query()));
    }

    #[test]
    fn period_cutting_range_end_is_in_range() {
        assert!(in_range(&(day(1, 12)..day(1, 20)), &query()));
    }

    #[test]
    fn period_ending_before_range_is_not_in_range() {
        assert!(!in_range(&(day(1, 1)..day(1, 6)), &query()));
    }

    #[test]
    fn period_ending_at_range_start_is_not_in_range() {
        assert!(!in_range(&(day(1, 1)..day(1, 8)), &query()));
    }

    #[test]
    fn period_starting_at_range_end_is_not_in_range() {
        assert!(!in_range(
            &(query().end..end_of_day_before(1, 23)),
            &query()
        ));
    }

    #[test]
    fn period_starting_after_range_is_not_in_range() {
        assert!(!in_range(
            &(at(1, 20, 2, 0, 0)..end_of_day_before(1, 23)),
            &query()
        ));
    }

    #[test]
    fn touching_is_not_overlapping_either_way_round() {
        assert!(!in_range(&(0..5), &(5..10)));
        assert!(!in_range(&(5..10), &(0..5)));
        assert!(in_range(&(0..6), &(5..10)));
        assert!(in_range(&(5..10), &(0..6)));
    }

    #[test]
    // No special casing: only the two endpoint comparisons matter.
    fn reversed_period_is_compared_by_its_endpoints() {
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 8..2;
        assert!(in_range(&reversed, &(0..10)));
        assert!(!in_range(&reversed, &(3..7)));
    }

    //
    // `period_duration` tests
    //

    #[test]
    fn duration_of_forward_period() {
        let p = at(3, 29, 13, 48, 0)..at(3, 30, 3, 43, 12);
        assert_eq!(
            period_duration(&p),
            Duration::hours(13) + Duration::minutes(55) + Duration::seconds(12)
        );
    }

    #[test]
    fn duration_of_reversed_period_is_negative() {
        let p = at(3, 29, 13, 48, 0)..at(3, 18, 0, 4, 42);
        assert_eq!(
            period_duration(&p),
            -(Duration::hours(277) + Duration::minutes(43) + Duration::seconds(18))
        );
    }

    #[test]
    fn duration_of_integer_periods() {
        assert_eq!(period_duration(&(3i64..10)), 7);
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 10i64..3;
        assert_eq!(period_duration(&reversed), -7);
        assert_eq!(period_duration(&(4i64..4)), 0);
    }

    //
    // `truncate_period` tests
    //

    fn shift() -> Range<DateTime<Utc>> {
        at(3, 29, 13, 48, 0)..at(3, 30, 3, 43, 12)
    }

    #[test]
    fn truncate_period_fully_in_range() {
        let range = day(3, 1)..end_of_day_before(3, 31);
        assert_eq!(
            truncate_period(&shift(), &range),
            (shift().start, shift().end)
        );
    }

    #[test]
    fn truncate_period_ending_outside_range() {
        let range = day(3, 29)..day(3, 30);
        assert_eq!(
            truncate_period(&shift(), &range),
            (at(3, 29, 13, 48, 0), day(3, 30))
        );
    }

    #[test]
    fn truncate_period_starting_outside_range() {
        let range = day(3, 30)..end_of_day_before(3, 31);
        assert_eq!(
            truncate_period(&shift(), &range),
            (day(3, 30), at(3, 30, 3, 43, 12))
        );
    }

    #[test]
    fn truncate_period_completely_out_of_range() {
        let range = day(1, 1)..end_of_day_before(1, 31);
        assert_eq!(
            truncate_period(&shift(), &range),
            (shift().start, shift().end)
        );
    }

    #[test]
    fn truncate_period_to_inner_range() {
        assert_eq!(truncate_period(&(0..100), &(10..20)), (10, 20));
    }

    #[test]
    fn truncate_touching_period_is_unchanged() {
        assert_eq!(truncate_period(&(0..10), &(10..20)), (0, 10));
    }

    #[test]
    fn references_are_periods_too() {
        let p = 2..8;
        let r = &p;
        assert_eq!(r.period_start(), 2);
        assert_eq!(TimePeriod::period_end(&r), 8);
        assert!(in_range(&r, &(7..9)));
    }
}
