//! Rate-validity tables for SMPTE timecode.
//!
//! Grounded in `dv-toolbox-core::pack::time::FrameTypeTrait`, which dispatches on the tape
//! [`System`](crate) (NTSC vs PAL/SECAM) to pick a maximum frame number and drop-frame
//! divisor. Here the same idea is keyed directly off the rate instead of a tape system enum,
//! since this crate has no notion of a physical recording system.

/// Non-drop-frame SMPTE timecode rates.
pub const NON_DROP_FRAME_RATES: &[f64] = &[1.0, 12.0, 23.976, 23.98, 24.0, 25.0, 30.0, 48.0, 50.0, 60.0];

/// Drop-frame SMPTE timecode rates.
pub const DROP_FRAME_RATES: &[f64] = &[29.97, 59.94];

/// All valid SMPTE timecode rates: the union of [`NON_DROP_FRAME_RATES`] and
/// [`DROP_FRAME_RATES`].
pub const VALID_TIMECODE_RATES: &[f64] = &[
    1.0, 12.0, 23.976, 23.98, 24.0, 25.0, 30.0, 48.0, 50.0, 60.0, 29.97, 59.94,
];

/// Returns `true` if `rate` is one of [`DROP_FRAME_RATES`].
pub fn is_drop_frame_rate(rate: f64) -> bool {
    DROP_FRAME_RATES.contains(&rate)
}

/// Returns `true` if `rate` is in [`VALID_TIMECODE_RATES`].
pub fn is_valid_timecode_rate(rate: f64) -> bool {
    VALID_TIMECODE_RATES.contains(&rate)
}

/// The number of frame numbers dropped at the top of every non-exempt minute, per spec.md §4.4.4:
/// `D = 2` at 29.97 Hz, `D = 4` at 59.94 Hz, `D = 0` for every non-drop-frame rate.
pub fn drop_frame_divisor(rate: f64) -> i64 {
    if rate == 29.97 {
        2
    } else if rate == 59.94 {
        4
    } else {
        0
    }
}
