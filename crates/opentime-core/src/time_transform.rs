//! A 1-D affine transform `t -> offset + scale * t`.

use std::fmt;

use garde::Validate;
use snafu::ResultExt;

use crate::error::{Result, ValidationSnafu};
use crate::rational_time::RationalTime;
use crate::time_range::{range_from_start_end_time, TimeRange};


fn check_optional_positive_rate(rate: &Option<f64>, _ctx: &()) -> garde::Result {
    match rate {
        Some(rate) if !rate.is_finite() || *rate <= 0.0 => {
            Err(garde::Error::new(format!("rate must be a positive, finite number, not {rate}")))
        }
        _ => Ok(()),
    }
}

/// `t -> offset + scale * t`, with an optional target rescaling rate.
///
/// If `rate` is `None`, applying the transform leaves the result at whatever rate the
/// `offset` addition produced; if set, the result is rescaled to it.
#[derive(Clone, Copy, Validate)]
pub struct TimeTransform {
    #[garde(skip)]
    offset: RationalTime,
    #[garde(skip)]
    scale: f64,
    #[garde(custom(check_optional_positive_rate))]
    rate: Option<f64>,
}

impl Default for TimeTransform {
    /// The identity transform: `offset = 0`, `scale = 1`, inherited rate.
    fn default() -> Self {
        Self { offset: RationalTime::default(), scale: 1.0, rate: None }
    }
}

impl TimeTransform {
    /// Constructs a transform. Fails if `rate` is `Some` and not a positive, finite number.
    pub fn new(offset: RationalTime, scale: f64, rate: Option<f64>) -> Result<Self> {
        let candidate = Self { offset, scale, rate };
        candidate.validate_with(&()).context(ValidationSnafu)?;
        Ok(candidate)
    }

    /// The additive component.
    pub fn offset(&self) -> RationalTime {
        self.offset
    }

    /// The multiplicative component.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The target rescaling rate, if any.
    pub fn rate(&self) -> Option<f64> {
        self.rate
    }

    /// Applies this transform to an instant: `t.value * scale`, expressed at `t`'s rate, then
    /// added to `offset` (with the usual rate-promotion rule), then rescaled to `self.rate` if
    /// set.
    pub fn applied_to_time(&self, t: RationalTime) -> Result<RationalTime> {
        let scaled = RationalTime::from_parts_unchecked(t.value() * self.scale, t.rate());
        let result = scaled + self.offset;
        match self.rate {
            Some(rate) => result.rescaled_to(rate),
            None => Ok(result),
        }
    }

    /// Composes `self` with `other`: `offset = self.offset + other.offset`, `scale = self.scale *
    /// other.scale`, `rate = self.rate.or(other.rate)`.
    pub fn applied_to_transform(&self, other: &TimeTransform) -> Result<TimeTransform> {
        TimeTransform::new(self.offset + other.offset, self.scale * other.scale, self.rate.or(other.rate))
    }

    /// Applies this transform to a range's endpoints and rebuilds the range from them.
    pub fn applied_to_range(&self, r: &TimeRange) -> Result<TimeRange> {
        let start = self.applied_to_time(r.start_time())?;
        let end_exclusive = self.applied_to_time(r.end_time_exclusive())?;
        range_from_start_end_time(start, end_exclusive)
    }
}

impl PartialEq for TimeTransform {
    /// Compares `offset`, `scale`, and `rate` fields directly (unlike the source this was ported
    /// from, which compared `self.rate` to itself — a bug; see `DESIGN.md`).
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.scale == other.scale && self.rate == other.rate
    }
}

impl fmt::Display for TimeTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeTransform({}, {}, {:?})", self.offset, self.scale, self.rate)
    }
}

impl fmt::Debug for TimeTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "otio.opentime.TimeTransform(offset={:?}, scale={:?}, rate={:?})",
            self.offset, self.scale, self.rate
        )
    }
}
