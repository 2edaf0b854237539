use core::fmt;

use crate::sortable::SortableIntervals;

#[cfg(feature = "quickcheck")]
use quickcheck::{Arbitrary, Gen};

/// Why two neighbouring intervals were rejected by [`check_overlap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlapErrorKind {
    /// The later interval does not start strictly after the earlier one.
    NotSorted,
    /// The intervals are in order, but the earlier one does not end
    /// before the later one starts.
    Overlapping,
}

/// A pair of neighbouring intervals that are either out of order
/// or overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlapError {
    kind: OverlapErrorKind,
    index: usize,
}

impl OverlapError {
    pub fn new(kind: OverlapErrorKind, index: usize) -> Self {
        OverlapError { kind, index }
    }

    pub fn kind(&self) -> OverlapErrorKind {
        self.kind
    }

    /// Index of the earlier interval of the offending pair.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the later interval of the offending pair.
    pub fn later_index(&self) -> usize {
        self.index + 1
    }
}

impl fmt::Display for OverlapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = match self.kind {
            OverlapErrorKind::NotSorted => "start",
            OverlapErrorKind::Overlapping => "end",
        };
        write!(
            f,
            "[{}].start must be after [{}].{}",
            self.later_index(),
            self.index,
            bound
        )
    }
}

impl core::error::Error for OverlapError {}

#[cfg(feature = "quickcheck")]
impl Arbitrary for OverlapErrorKind {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            OverlapErrorKind::NotSorted
        } else {
            OverlapErrorKind::Overlapping
        }
    }
}

#[cfg(feature = "quickcheck")]
impl Arbitrary for OverlapError {
    fn arbitrary(g: &mut Gen) -> Self {
        // Leave room for `later_index`.
        let index = usize::arbitrary(g).saturating_sub(1);
        OverlapError::new(OverlapErrorKind::arbitrary(g), index)
    }
}

/// Checks that `intervals` are sorted by start and that no two of
/// them overlap.
///
/// Both conditions are checked for each neighbouring pair in a single
/// pass, and the first offending pair is reported. Collections with
/// fewer than two intervals are always valid.
///
/// Run this once before handing a collection to
/// [`periods_overlap_range`](crate::periods_overlap_range), which
/// assumes both conditions hold.
pub fn check_overlap<S>(intervals: &S) -> Result<(), OverlapError>
where
    S: SortableIntervals + ?Sized,
{
    for i in 0..intervals.len().saturating_sub(1) {
        // Sortedness is checked on the fly.
        if !intervals.less(i, i + 1) {
            let err = OverlapError::new(OverlapErrorKind::NotSorted, i);
            log::debug!("rejected intervals: {}", err);
            return Err(err);
        }

        if !intervals.ends_before_start(i, i + 1) {
            let err = OverlapError::new(OverlapErrorKind::Overlapping, i);
            log::debug!("rejected intervals: {}", err);
            return Err(err);
        }
    }
    Ok(())
}
