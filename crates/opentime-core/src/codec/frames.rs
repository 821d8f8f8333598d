//! Frame number <-> [`RationalTime`] conversions.

use crate::error::Result;
use crate::rational_time::RationalTime;

/// `RationalTime(floor(frame), fps)`. Fails if `fps` is not a positive, finite number.
pub fn from_frames(frame: f64, fps: f64) -> Result<RationalTime> {
    RationalTime::new(frame.floor(), fps)
}

/// The frame index of `t` at `fps`, or at `t.rate()` if `fps` is `None` or already equals it.
///
/// Fails if `fps` is `Some` and not a positive, finite number.
pub fn to_frames(t: RationalTime, fps: Option<f64>) -> Result<i64> {
    let value = match fps {
        Some(fps) if fps != t.rate() => t.rescaled_to(fps)?.value(),
        _ => t.value(),
    };
    Ok(value.floor() as i64)
}
