//! Wall-clock `HH:MM:SS[.micro]` string <-> [`RationalTime`] conversion.
//!
//! Distinct from [`crate::codec::timecode`]: no drop-frame notion, no frame-rate-dependent field
//! widths, and `;` is always rejected rather than meaning anything.

use std::sync::LazyLock;

use regex::Regex;
use snafu::OptionExt;

use crate::codec::seconds::to_seconds;
use crate::error::{DropFrameInTimeStringSnafu, MalformedSnafu, Result};
use crate::rational_time::RationalTime;

static TIME_STRING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<hour>\d+):(?P<minute>\d+):(?P<second>\d+)(\.(?P<micro>\d+))?$").unwrap()
});

/// Parses `HH:MM:SS[.micro]` and rescales the result to `rate`.
///
/// `micro` is truncated to its first six digits if longer. `;` anywhere in `input` is rejected
/// outright, since drop-frame notation has no meaning for a wall-clock string.
pub fn from_time_string(input: &str, rate: f64) -> Result<RationalTime> {
    if input.contains(';') {
        return DropFrameInTimeStringSnafu.fail();
    }

    let malformed = || MalformedSnafu { input: input.to_string(), expected: "HH:MM:SS[.micro] time string" };

    let captures = TIME_STRING_RE.captures(input).context(malformed())?;

    let hour: f64 = captures["hour"].parse().ok().context(malformed())?;
    let minute: f64 = captures["minute"].parse().ok().context(malformed())?;
    let second: f64 = captures["second"].parse().ok().context(malformed())?;
    let micro = captures
        .name("micro")
        .and_then(|m| {
            let digits = &m.as_str()[..m.as_str().len().min(6)];
            digits.parse::<f64>().ok().map(|numerator| numerator / 10f64.powi(digits.len() as i32))
        })
        .unwrap_or(0.0);

    let total_seconds = (second + micro) + 60.0 * minute + 3600.0 * hour;
    RationalTime::new(total_seconds, 1.0).and_then(|t| t.rescaled_to(rate))
}

/// Formats `t` as `HH:MM:SS[.micro]`, with days overflowing into the hours field (no day
/// component in the output). `micro` has no fixed trailing zeros: trailing zeros are trimmed, and
/// the decimal point is omitted entirely when the fraction is zero.
pub fn to_time_string(t: RationalTime) -> String {
    let total_seconds = to_seconds(t);
    let days = (total_seconds / 86400.0).floor();
    let mut remainder = total_seconds - days * 86400.0;

    let hours = (remainder / 3600.0).floor();
    remainder -= hours * 3600.0;
    let minutes = (remainder / 60.0).floor();
    remainder -= minutes * 60.0;

    let hours = hours + days * 24.0;
    let seconds = remainder.floor();
    let micro = ((remainder - seconds) * 1_000_000.0).round() as i64;

    let mut result = format!("{:02}:{:02}:{:02}", hours as i64, minutes as i64, seconds as i64);
    if micro > 0 {
        let micro_digits = format!("{micro:06}");
        result.push('.');
        result.push_str(micro_digits.trim_end_matches('0'));
    }
    result
}
