#![no_main]
use libfuzzer_sys::fuzz_target;

use periods::{check_overlap, OverlapErrorKind};
use std::ops::Range;

fuzz_target!(|periods: Vec<Range<u8>>| {
    // First neighbouring pair that is out of order or overlapping.
    let expected = periods.windows(2).enumerate().find_map(|(i, pair)| {
        if pair[0].start >= pair[1].start {
            Some((i, OverlapErrorKind::NotSorted))
        } else if pair[0].end > pair[1].start {
            Some((i, OverlapErrorKind::Overlapping))
        } else {
            None
        }
    });

    match check_overlap(&periods[..]) {
        Ok(()) => assert_eq!(expected, None),
        Err(err) => {
            assert_eq!(expected, Some((err.index(), err.kind())));
            assert_eq!(err.later_index(), err.index() + 1);
        }
    }
});
