//! Footage-string <-> [`RationalTime`] conversion.
//!
//! Unimplemented: the footage string format is declared by callers of this library but was never
//! specified by the source this was ported from. Kept as explicit stubs rather than omitted, so
//! the free-function surface matches the rest of [`crate::codec`].

use crate::error::{NotImplementedSnafu, Result};
use crate::rational_time::RationalTime;

/// Always fails with [`crate::error::Error`]'s not-implemented variant.
pub fn from_footage(_footage: &str, _rate: f64) -> Result<RationalTime> {
    NotImplementedSnafu { operation: "from_footage" }.fail()
}

/// Always fails with [`crate::error::Error`]'s not-implemented variant.
pub fn to_footage(_t: RationalTime) -> Result<String> {
    NotImplementedSnafu { operation: "to_footage" }.fail()
}
