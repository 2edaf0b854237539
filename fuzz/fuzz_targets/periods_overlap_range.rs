#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::{Arbitrary, Unstructured};
use periods::{check_overlap, in_range, periods_overlap_range, truncate_period};
use std::ops::Range;

#[derive(Clone, Debug)]
struct Input {
    periods: Vec<Range<u16>>,
    query: Range<u16>,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        // Build sorted, disjoint periods out of (gap, length) pairs
        // rather than hoping for them to show up by chance.
        let pieces: Vec<(u8, u8)> = u.arbitrary()?;
        let mut start = 0u16;
        let mut periods = Vec::with_capacity(pieces.len());
        for (gap, len) in pieces {
            let len = u16::from(len.max(1));
            let Some(period_start) = start.checked_add(u16::from(gap)) else {
                break;
            };
            let Some(period_end) = period_start.checked_add(len) else {
                break;
            };
            periods.push(period_start..period_end);
            start = period_end;
        }
        Ok(Self {
            periods,
            query: u.arbitrary()?,
        })
    }
}

fuzz_target!(|input: Input| {
    let Input { periods, query } = input;

    assert!(check_overlap(&periods[..]).is_ok());

    let found = periods_overlap_range(&periods, &query);

    // Exactly the overlapping periods are found.
    for (index, period) in periods.iter().enumerate() {
        assert_eq!(found.contains(&index), in_range(period, &query));
    }
    if found.is_empty() {
        assert_eq!(found, 0..0);
    }

    // An empty (or reversed) query can still sit inside a period,
    // but there is nothing sensible to truncate to.
    if query.is_empty() {
        return;
    }

    // Truncated periods all lie inside the query, and still
    // follow on from each other.
    let truncated: Vec<(u16, u16)> = periods[found]
        .iter()
        .map(|period| truncate_period(period, &query))
        .collect();
    for &(start, end) in &truncated {
        assert!(start >= query.start && end <= query.end);
        assert!(start < end);
    }
    for pair in truncated.windows(2) {
        assert!(pair[0].1 <= pair[1].0);
    }
});
