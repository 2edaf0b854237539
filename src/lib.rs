/*!
Validation and range search over sorted, non-overlapping periods.

A _period_ is anything with a start and an end on a single timeline:
a [`Range`] of integers, a `Range<DateTime<Utc>>`, or your own type
implementing [`TimePeriod`]. Given a slice of periods this crate answers
two questions:

- Are the periods really sorted by start, and is each of them over
  before the next one begins? ([`check_overlap`])
- Which periods overlap a given query range? ([`periods_overlap_range`])

The second question is answered with two binary searches, which is only
correct if the answer to the first question is "yes". The intended use
is to validate a sequence once, then search it as often as you like.

The crate owns no data and never stores, merges, or sorts periods.
Every function borrows what it's given for the length of the call.


# Periods are half-open

A period covers its start but not its end, just like [`Range`].
Two periods that touch (one ends exactly where the next starts) do
not overlap, so `0..5` followed by `5..10` is a valid sequence, and
`5..10` is not found when searching for `0..5`.

Open-ended periods are up to you: map a missing end to the largest
instant your type can represent (e.g. `DateTime::<Utc>::MAX_UTC`)
in your [`TimePeriod`] implementation.


# Example: use with Chrono

```rust
use chrono::{Duration, TimeZone, Utc};
use periods::{check_overlap, periods_overlap_range, truncate_period};

let start_of_roster = Utc.with_ymd_and_hms(2019, 1, 7, 0, 0, 0).unwrap();
let shifts: Vec<_> = (0..6)
    .map(|n| {
        let start = start_of_roster + Duration::days(2 * n);
        start..start + Duration::days(2)
    })
    .collect();

// Validate once...
check_overlap(&shifts[..]).expect("shifts must not overlap");

// ...then search as often as needed.
let week = start_of_roster + Duration::days(3)..start_of_roster + Duration::days(8);
let found = periods_overlap_range(&shifts, &week);
assert_eq!(found, 1..4);

// Shifts at the edges stick out of the week, so clip them.
let (start, end) = truncate_period(&shifts[found.start], &week);
assert_eq!(start, week.start);
assert_eq!(end - start, Duration::days(1));
```


## Crate features

By default this crate depends only on the [`log`](https://docs.rs/log)
facade. Rejected sequences are logged at `debug` level and search
results at `trace` level; nothing is printed unless you install a logger.

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for [`OverlapError`] and [`OverlapErrorKind`].

You can similarly enable support for _quickcheck_ by enabling
the **quickcheck** feature.


## Building without the Rust standard library

This crate only links `core`, and doesn't even need a global
allocator.


[`Range`]: core::ops::Range

*/

#![no_std]
#[cfg(test)]
extern crate alloc;

pub mod overlap;
pub mod period;
pub mod search;
pub mod sortable;

#[cfg(test)]
mod stupid_search;

pub use overlap::{check_overlap, OverlapError, OverlapErrorKind};
pub use period::{in_range, period_duration, truncate_period, TimePeriod};
pub use search::periods_overlap_range;
pub use sortable::SortableIntervals;
