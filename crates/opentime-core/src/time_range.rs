//! A half-open interval of time, `[start_time, start_time + duration)`.

use std::fmt;

use garde::Validate;
use snafu::ResultExt;

use crate::error::{Result, ValidationSnafu};
use crate::rational_time::RationalTime;


/// How a [`TimeRange::clamped_time`]/[`TimeRange::clamped_range`] boundary behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundStrategy {
    /// Leave the boundary unchanged.
    Free,
    /// Clip the boundary to the enclosing range.
    Clamp,
}

/// The half-open interval `[start_time, start_time + duration)`.
///
/// A zero-duration range denotes the single instant `start_time`.
#[derive(Clone, Copy, PartialEq, Hash, Validate)]
pub struct TimeRange {
    #[garde(skip)]
    start_time: RationalTime,
    #[garde(custom(check_non_negative_duration))]
    duration: RationalTime,
}

fn check_non_negative_duration(duration: &RationalTime, _ctx: &()) -> garde::Result {
    if duration.value() >= 0.0 {
        Ok(())
    } else {
        Err(garde::Error::new(format!("duration must be non-negative, not {duration}")))
    }
}

fn min_time(a: RationalTime, b: RationalTime) -> RationalTime {
    if a < b {
        a
    } else {
        b
    }
}

fn max_time(a: RationalTime, b: RationalTime) -> RationalTime {
    if a > b {
        a
    } else {
        b
    }
}

impl TimeRange {
    /// Constructs `[start_time, start_time + duration)`. Fails if `duration.value() < 0`.
    pub fn new(start_time: RationalTime, duration: RationalTime) -> Result<Self> {
        let candidate = Self { start_time, duration };
        candidate.validate_with(&()).context(ValidationSnafu)?;
        Ok(candidate)
    }

    /// The inclusive start of the range.
    pub fn start_time(&self) -> RationalTime {
        self.start_time
    }

    /// The duration of the range. Always has a non-negative `value()`.
    pub fn duration(&self) -> RationalTime {
        self.duration
    }

    /// The first instant outside the range: `duration + start_time.rescaled_to_time(duration)`.
    pub fn end_time_exclusive(&self) -> RationalTime {
        self.duration + self.start_time.rescaled_to_time(self.duration)
    }

    /// The time of the last sample that still has data in the range, accounting for a
    /// fractional-frame tail.
    ///
    /// For `TimeRange(0, 10)` at rate 24, this is `9` (not `10`, which is
    /// [`Self::end_time_exclusive`]). For a duration of `10.5`, it is `10`.
    pub fn end_time_inclusive(&self) -> RationalTime {
        let end_exclusive = self.end_time_exclusive();
        let start_at_duration_rate = self.start_time.rescaled_to_time(self.duration);
        if (end_exclusive - start_at_duration_rate).value() > 1.0 {
            if self.duration.value().fract() != 0.0 {
                RationalTime::from_parts_unchecked(
                    end_exclusive.value().floor(),
                    end_exclusive.rate(),
                )
            } else {
                end_exclusive - RationalTime::from_parts_unchecked(1.0, self.duration.rate())
            }
        } else {
            self.start_time
        }
    }

    /// The smallest `TimeRange` that covers both `self` and `other`.
    pub fn extended_by(&self, other: &TimeRange) -> Result<TimeRange> {
        let start = min_time(self.start_time, other.start_time);
        let end_exclusive = max_time(self.end_time_exclusive(), other.end_time_exclusive());
        range_from_start_end_time(start, end_exclusive)
    }

    /// `true` if `self` contains the instant `t`: `start_time <= t < end_time_exclusive`.
    pub fn contains_time(&self, t: RationalTime) -> bool {
        self.start_time <= t && t < self.end_time_exclusive()
    }

    /// `true` if `self` fully contains `other`: `self.start <= other.start && self.end_exclusive
    /// >= other.end_exclusive`.
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        self.start_time <= other.start_time && self.end_time_exclusive() >= other.end_time_exclusive()
    }

    /// `true` if `self` overlaps the instant `t`. Identical to [`Self::contains_time`].
    pub fn overlaps_time(&self, t: RationalTime) -> bool {
        self.contains_time(t)
    }

    /// `true` if `self` overlaps any part of `other`.
    pub fn overlaps_range(&self, other: &TimeRange) -> bool {
        self.start_time < other.end_time_exclusive() && other.start_time < self.end_time_exclusive()
    }

    /// Clamps `other` to `self`'s bounds per `start_bound`/`end_bound`.
    ///
    /// The end comparison is against [`Self::end_time_exclusive`], not
    /// [`Self::end_time_inclusive`] — preserved from the source behavior rather than silently
    /// changed; see `DESIGN.md`.
    pub fn clamped_time(
        &self,
        other: RationalTime,
        start_bound: BoundStrategy,
        end_bound: BoundStrategy,
    ) -> RationalTime {
        let mut test_point = other;
        if start_bound == BoundStrategy::Clamp {
            test_point = max_time(other, self.start_time);
        }
        if end_bound == BoundStrategy::Clamp {
            test_point = min_time(test_point, self.end_time_exclusive());
        }
        test_point
    }

    /// Clamps `other`'s bounds to `self`'s bounds per `start_bound`/`end_bound`.
    pub fn clamped_range(
        &self,
        other: &TimeRange,
        start_bound: BoundStrategy,
        end_bound: BoundStrategy,
    ) -> Result<TimeRange> {
        let start =
            if start_bound == BoundStrategy::Clamp {
                max_time(other.start_time, self.start_time)
            } else {
                other.start_time
            };
        let end_exclusive = if end_bound == BoundStrategy::Clamp {
            min_time(other.end_time_exclusive(), self.end_time_exclusive())
        } else {
            other.end_time_exclusive()
        };
        range_from_start_end_time(start, end_exclusive)
    }
}

/// Computes the duration of samples from `start` to `end_exclusive`, expressed at `start`'s rate.
///
/// Does not validate that the result is non-negative; [`range_from_start_end_time`] and
/// [`TimeRange::new`] are where that invariant is enforced, per the resolved Open Question in
/// `DESIGN.md` (validate at construction, not here).
pub fn duration_from_start_end_time(start: RationalTime, end_exclusive: RationalTime) -> RationalTime {
    if start.rate() == end_exclusive.rate() {
        RationalTime::from_parts_unchecked(end_exclusive.value() - start.value(), start.rate())
    } else {
        RationalTime::from_parts_unchecked(
            end_exclusive.value_rescaled_to(start.rate()) - start.value(),
            start.rate(),
        )
    }
}

/// Constructs a `TimeRange` from a start and an end-exclusive instant.
pub fn range_from_start_end_time(start: RationalTime, end_exclusive: RationalTime) -> Result<TimeRange> {
    TimeRange::new(start, duration_from_start_end_time(start, end_exclusive))
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeRange({}, {})", self.start_time, self.duration)
    }
}

// Kept in the `otio.opentime.TimeRange(start_time=.., duration=..)` form for interoperability;
// see the equivalent note on `RationalTime`'s `Debug` impl.
impl fmt::Debug for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "otio.opentime.TimeRange(start_time={:?}, duration={:?})",
            self.start_time, self.duration
        )
    }
}
