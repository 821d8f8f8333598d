//! SMPTE timecode (`HH:MM:SS:FF` / drop-frame `HH:MM:SS;FF`) <-> [`RationalTime`] conversion.

use std::sync::LazyLock;

use regex::Regex;
use snafu::OptionExt;

use crate::error::{
    FrameOutOfRangeSnafu, InvalidTimecodeRateSnafu, MalformedSnafu, NegativeTimecodeValueSnafu,
    NotDropFrameRateSnafu, Result,
};
use crate::rates::{drop_frame_divisor, is_drop_frame_rate, is_valid_timecode_rate};
use crate::rational_time::RationalTime;

static TIMECODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<hour>\d+):(?P<minute>\d+):(?P<second>\d+)(?P<sep>[:;])(?P<frame>\d+)$")
        .unwrap()
});

/// Fails unless `rate` is one of [`crate::rates::VALID_TIMECODE_RATES`].
pub fn validate_timecode_rate(rate: f64) -> Result<()> {
    if is_valid_timecode_rate(rate) {
        Ok(())
    } else {
        InvalidTimecodeRateSnafu { rate }.fail()
    }
}

/// Decodes a colon- (or, for drop-frame, semicolon-) delimited timecode string at `rate` into a
/// [`RationalTime`].
///
/// The `;` separator between seconds and frames marks drop-frame notation; it is only accepted
/// when `rate` is a drop-frame rate. The drop-frame compensation itself is applied based on
/// `rate`, independent of which separator was used.
pub fn from_timecode(timecode: &str, rate: f64) -> Result<RationalTime> {
    validate_timecode_rate(rate)?;

    let malformed = || MalformedSnafu {
        input: timecode.to_string(),
        expected: "HH:MM:SS:FF or HH:MM:SS;FF timecode",
    };
    let captures = TIMECODE_RE.captures(timecode).context(malformed())?;

    let hour: i64 = captures["hour"].parse().ok().context(malformed())?;
    let minute: i64 = captures["minute"].parse().ok().context(malformed())?;
    let second: i64 = captures["second"].parse().ok().context(malformed())?;
    let frame: i64 = captures["frame"].parse().ok().context(malformed())?;
    let separator = &captures["sep"];

    if separator == ";" && !is_drop_frame_rate(rate) {
        return NotDropFrameRateSnafu { timecode: timecode.to_string(), rate }.fail();
    }

    let nominal_fps = rate.ceil() as i64;
    if frame < 0 || frame >= nominal_fps {
        return FrameOutOfRangeSnafu { frame, nominal_fps, rate }.fail();
    }

    let d = drop_frame_divisor(rate);
    let total_minutes = hour * 60 + minute;
    let value = (total_minutes * 60 + second) * nominal_fps + frame
        - d * (total_minutes - total_minutes / 10);

    RationalTime::new(value as f64, rate)
}

/// Encodes `t` as a timecode string at `target_rate` (default `t.rate()`).
///
/// Fails if the working rate is not a valid timecode rate, or if `t.value()` is negative.
pub fn to_timecode(t: RationalTime, target_rate: Option<f64>) -> Result<String> {
    let mut rate = target_rate.unwrap_or_else(|| t.rate());
    validate_timecode_rate(rate)?;

    if t.value() < 0.0 {
        return NegativeTimecodeValueSnafu { value: t.value() }.fail();
    }

    // Non-drop rates near 24 (23.976, 23.98) are snapped to exactly 24 to avoid rounding drift
    // in the constants below.
    if !is_drop_frame_rate(rate) && rate.round() == 24.0 {
        rate = 24.0;
    }

    let d = drop_frame_divisor(rate);
    let frames_per_hour = (rate * 3600.0).round() as i64;
    let frames_per_24h = frames_per_hour * 24;
    let frames_per_10m = (rate * 600.0).round() as i64;
    let frames_per_min = rate.round() as i64 * 60 - d;
    let nominal_fps = rate.ceil() as i64;

    // `rate` (possibly snapped above) only feeds the field-arithmetic constants; the instant
    // itself is never rescaled onto it, matching the source's `value = time_obj.value`.
    let mut value = t.value().round() as i64;
    value = value.rem_euclid(frames_per_24h);

    let tens_of_minutes = value / frames_per_10m;
    let remainder = value % frames_per_10m;
    if remainder > d {
        value += d * 9 * tens_of_minutes + d * ((remainder - d) / frames_per_min);
    } else {
        value += d * 9 * tens_of_minutes;
    }

    let ff = value % nominal_fps;
    let ss = (value / nominal_fps) % 60;
    let mm = (value / nominal_fps / 60) % 60;
    let hh = value / nominal_fps / 3600;

    let sep = if d > 0 { ';' } else { ':' };
    Ok(format!("{hh:02}:{mm:02}:{ss:02}{sep}{ff:02}"))
}

#[cfg(test)]
mod tests;
