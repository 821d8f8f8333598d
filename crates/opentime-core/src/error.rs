//! Error types returned by this crate.
//!
//! Mirrors the shape used by `dv-toolbox-core`'s `file::InfoError`: an opaque wrapper struct
//! around a private enum, so that the variant list and field layout stay out of the public API
//! and can evolve without a breaking change.

use snafu::Snafu;


/// Result alias used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error returned by a fallible operation in this crate.
///
/// Use [`std::error::Error::source`], or the
/// [`display_error_chain`](https://docs.rs/display-error-chain) crate, to print the full chain,
/// including the originating [`garde::Report`] for validation failures.
#[derive(Debug, Snafu)]
pub struct Error(InnerError);

/// The concrete reasons an operation in this crate can fail.
///
/// Not public: callers match on [`Error`]'s `Display`/`source` output, not on the variant.
///
/// There are intentionally no [`snafu::Backtrace`] fields here, for the same reason
/// `dv-toolbox-core::pack::RawError` omits them: timecode decode/encode can run once per frame
/// in a pipeline, and backtrace capture is too slow to pay for on every call.
#[derive(Debug, Snafu)]
#[allow(missing_docs)]
pub(crate) enum InnerError {
    /// A [`crate::RationalTime`] or [`crate::TimeRange`] failed one of its field invariants
    /// (`rate > 0`, `duration >= 0`).
    #[snafu(display("failed validation"))]
    Validation { source: garde::Report },

    #[snafu(display(
        "{rate} is not a valid timecode rate; valid rates are {valid:?}",
        valid = crate::rates::VALID_TIMECODE_RATES
    ))]
    InvalidTimecodeRate { rate: f64 },

    #[snafu(display(
        "frame number {frame} is out of range: must be in [0, {nominal_fps}) for rate {rate}"
    ))]
    FrameOutOfRange { frame: i64, nominal_fps: i64, rate: f64 },

    #[snafu(display(
        "timecode \"{timecode}\" uses a ';' frame separator (drop-frame), but rate {rate} is \
        not a drop-frame rate"
    ))]
    NotDropFrameRate { timecode: String, rate: f64 },

    #[snafu(display("value {value} is negative, which cannot be converted to a timecode"))]
    NegativeTimecodeValue { value: f64 },

    #[snafu(display("drop-frame timecodes (';' separator) are not supported in time strings"))]
    DropFrameInTimeString,

    #[snafu(display("\"{input}\" is not a valid {expected} string"))]
    Malformed { input: String, expected: &'static str },

    #[snafu(display("{operation} is not implemented"))]
    NotImplemented { operation: &'static str },
}
