//! An instantaneous point in time, expressed as a `(value, rate)` pair.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub};

use garde::Validate;
use snafu::ResultExt;

use crate::error::{Result, ValidationSnafu};

#[cfg(test)]
mod tests;

/// An instant `value * (1 / rate)` seconds after time zero.
///
/// `RationalTime` is a plain value type: every operation that looks like it "modifies" an
/// instance returns a fresh one. There is no aliasing hazard, and copying is always a cheap,
/// trivial bitwise copy (`Copy` + `Clone`).
///
/// `rate` is always a positive, finite number; this is enforced at construction by [`Self::new`]
/// and preserved by every other operation on this type, so a `rate <= 0` is never an observable
/// state from outside this module.
#[derive(Clone, Copy, Validate)]
pub struct RationalTime {
    #[garde(skip)]
    value: f64,
    #[garde(custom(check_positive_rate))]
    rate: f64,
}

fn check_positive_rate(rate: &f64, _ctx: &()) -> garde::Result {
    if rate.is_finite() && *rate > 0.0 {
        Ok(())
    } else {
        Err(garde::Error::new(format!("rate must be a positive, finite number, not {rate}")))
    }
}

impl Default for RationalTime {
    /// The instant `0/1` seconds, i.e. time zero.
    fn default() -> Self {
        Self { value: 0.0, rate: 1.0 }
    }
}

impl RationalTime {
    /// Construct a `RationalTime` meaning `value / rate` seconds after time zero.
    ///
    /// Fails if `rate` is not a positive, finite number.
    pub fn new(value: f64, rate: f64) -> Result<Self> {
        let candidate = Self { value, rate };
        candidate.validate_with(&()).context(ValidationSnafu)?;
        Ok(candidate)
    }

    /// Construct a `RationalTime` without validating `rate`.
    ///
    /// Only for use within this crate, where `rate` is provably positive and finite because it
    /// was derived from operand(s) that were already valid `RationalTime` instances (e.g. the
    /// larger of two valid rates, or a rate carried through unchanged).
    pub(crate) fn from_parts_unchecked(value: f64, rate: f64) -> Self {
        debug_assert!(rate.is_finite() && rate > 0.0, "rate {rate} was not already validated");
        Self { value, rate }
    }

    /// The `value` component: the number of `1/rate`-second samples after time zero.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The `rate` component, in Hz. Always positive and finite.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns this instant expressed at `new_rate`, computed as
    /// `self.value * new_rate / self.rate` in floating point (equal rates short-circuit to avoid
    /// rounding drift).
    ///
    /// Fails if `new_rate` is not a positive, finite number.
    pub fn rescaled_to(&self, new_rate: f64) -> Result<Self> {
        Self::new(self.value_rescaled_to(new_rate), new_rate)
    }

    /// Returns this instant expressed at `other`'s rate.
    ///
    /// Cannot fail: `other`'s rate is already known to be positive and finite.
    pub fn rescaled_to_time(&self, other: RationalTime) -> Self {
        Self::from_parts_unchecked(self.value_rescaled_to(other.rate), other.rate)
    }

    /// The `value` this instant would have if rescaled to `new_rate`, without constructing a new
    /// `RationalTime`. Used internally wherever only the numeric value is needed.
    pub(crate) fn value_rescaled_to(&self, new_rate: f64) -> f64 {
        if new_rate == self.rate {
            self.value
        } else {
            self.value * new_rate / self.rate
        }
    }

    /// This instant expressed as a plain number of seconds (`value / rate`).
    pub(crate) fn as_seconds(&self) -> f64 {
        self.value / self.rate
    }

    /// Returns `true` if `self` and `other` are within `delta` of each other once `self` is
    /// rescaled to `other`'s rate: `|self.rescaled_to(other.rate).value - other.value| <= delta`.
    pub fn almost_equal(&self, other: &RationalTime, delta: f64) -> bool {
        (self.value_rescaled_to(other.rate) - other.value).abs() <= delta
    }
}

impl Add for RationalTime {
    type Output = RationalTime;

    /// Sums two instants. The result's rate is the faster (larger) of the two operand rates; the
    /// slower operand is rescaled into that rate first. Equal-rate operands skip rescaling.
    fn add(self, rhs: RationalTime) -> RationalTime {
        if self.rate == rhs.rate {
            RationalTime::from_parts_unchecked(self.value + rhs.value, self.rate)
        } else if self.rate > rhs.rate {
            RationalTime::from_parts_unchecked(self.value + rhs.value_rescaled_to(self.rate), self.rate)
        } else {
            RationalTime::from_parts_unchecked(rhs.value + self.value_rescaled_to(rhs.rate), rhs.rate)
        }
    }
}

impl AddAssign for RationalTime {
    /// Shares the same rate-promotion semantics as [`Add`].
    fn add_assign(&mut self, rhs: RationalTime) {
        *self = *self + rhs;
    }
}

impl Sub for RationalTime {
    type Output = RationalTime;

    /// Subtracts `rhs` from `self`. Follows the same rate-promotion rule as [`Add`]; the result's
    /// sign follows the subtraction.
    fn sub(self, rhs: RationalTime) -> RationalTime {
        if self.rate == rhs.rate {
            RationalTime::from_parts_unchecked(self.value - rhs.value, self.rate)
        } else if self.rate > rhs.rate {
            RationalTime::from_parts_unchecked(self.value - rhs.value_rescaled_to(self.rate), self.rate)
        } else {
            RationalTime::from_parts_unchecked(self.value_rescaled_to(rhs.rate) - rhs.value, rhs.rate)
        }
    }
}

impl PartialEq for RationalTime {
    /// Two `RationalTime`s are equal iff they denote the same instant: `self.rescaled_to(other.rate).value == other.value`.
    fn eq(&self, other: &Self) -> bool {
        self.value_rescaled_to(other.rate) == other.value
    }
}

impl PartialOrd for RationalTime {
    /// Order comparisons convert both sides to seconds (`value / rate`) and compare those.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_seconds().partial_cmp(&other.as_seconds())
    }
}

/// Hashes the raw `(value, rate)` pair as stored, via their IEEE-754 bit patterns.
///
/// This does **not** agree with [`PartialEq`]: two `RationalTime`s that denote the same instant
/// but are stored at different rates (e.g. `RationalTime::new(1.0, 1.0)` and
/// `RationalTime::new(24.0, 24.0)`) compare equal but are not required to hash equal. This is a
/// deliberate, documented choice (the alternative — hashing the rescaled-to-seconds value —
/// would make the hash depend on floating-point rescaling precision instead of the stored
/// representation) and callers should not rely on this type as a `HashMap` key unless all
/// instances are constructed at a consistent rate.
impl Hash for RationalTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
        self.rate.to_bits().hash(state);
    }
}

impl fmt::Display for RationalTime {
    /// The bare, positional human string form: `RationalTime(value, rate)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RationalTime({}, {})", self.value, self.rate)
    }
}

// Kept in the `otio.opentime.RationalTime(value=.., rate=..)` form for interoperability with any
// external consumer relying on it, rather than Rust's usual derived struct-literal debug form.
impl fmt::Debug for RationalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "otio.opentime.RationalTime(value={:?}, rate={:?})", self.value, self.rate)
    }
}
