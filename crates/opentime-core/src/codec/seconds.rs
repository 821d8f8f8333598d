//! Seconds <-> [`RationalTime`] conversions.

use crate::rational_time::RationalTime;

/// `RationalTime(seconds, 1)`. Cannot fail: rate `1` is always valid.
pub fn from_seconds(seconds: f64) -> RationalTime {
    RationalTime::from_parts_unchecked(seconds, 1.0)
}

/// `t.value / t.rate`, i.e. `t` rescaled to a rate of `1`.
pub fn to_seconds(t: RationalTime) -> f64 {
    t.value_rescaled_to(1.0)
}
