use googletest::prelude::*;
use itertools::iproduct;
use rstest::rstest;

use super::*;
use crate::rates::VALID_TIMECODE_RATES;

#[rstest]
#[case(24.0, true)]
#[case(23.976, true)]
#[case(29.97, true)]
#[case(23.0, false)]
fn test_validate_timecode_rate(#[case] rate: f64, #[case] valid: bool) {
    expect_that!(validate_timecode_rate(rate).is_ok(), eq(valid));
}

#[googletest::test]
fn test_from_timecode_one_hour() {
    expect_that!(from_timecode("01:00:00:00", 24.0), ok(eq(RationalTime::new(86400.0, 24.0).unwrap())));
}

#[googletest::test]
fn test_to_timecode_one_hour() {
    let t = RationalTime::new(86400.0, 24.0).unwrap();
    expect_that!(to_timecode(t, None), ok(eq("01:00:00:00".to_string())));
}

#[googletest::test]
fn test_from_timecode_drop_frame_minute_one() {
    // minute 1, frame 2: two frame numbers already dropped at the top of the minute.
    let t = from_timecode("00:01:00;02", 29.97).unwrap();
    expect_that!(t, eq(RationalTime::new(1800.0, 29.97).unwrap()));
}

#[googletest::test]
fn test_to_timecode_drop_frame_minute_one() {
    let t = RationalTime::new(1800.0, 29.97).unwrap();
    expect_that!(to_timecode(t, Some(29.97)), ok(eq("00:01:00;02".to_string())));
}

#[googletest::test]
fn test_to_timecode_tenth_minute_exemption() {
    let t = RationalTime::new(17982.0, 29.97).unwrap();
    expect_that!(to_timecode(t, Some(29.97)), ok(eq("00:10:00;00".to_string())));
}

#[googletest::test]
fn test_from_timecode_rejects_semicolon_on_non_drop_rate() {
    expect_that!(from_timecode("00:01:00;02", 24.0), err(anything()));
}

#[googletest::test]
fn test_from_timecode_rejects_frame_out_of_range() {
    expect_that!(from_timecode("00:00:00:24", 24.0), err(anything()));
}

#[googletest::test]
fn test_from_timecode_rejects_malformed_string() {
    expect_that!(from_timecode("not a timecode", 24.0), err(anything()));
}

#[googletest::test]
fn test_to_timecode_rejects_negative_value() {
    let t = RationalTime::from_parts_unchecked(-1.0, 24.0);
    expect_that!(to_timecode(t, Some(24.0)), err(anything()));
}

#[googletest::test]
fn test_round_trips_every_frame_of_every_rate() {
    // Sampling every single frame of every rate over a 24-hour window is exhaustive but slow
    // across 12 rates; stride by a prime to still cross every minute boundary (and both
    // drop-frame exemption cases) without the full O(24h) cost per rate.
    let max_frames_per_24h = VALID_TIMECODE_RATES
        .iter()
        .map(|&rate| (rate * 3600.0).round() as i64 * 24)
        .max()
        .unwrap();
    for (&rate, frame) in iproduct!(VALID_TIMECODE_RATES.iter(), (0..max_frames_per_24h).step_by(97)) {
        let frames_per_24h = (rate * 3600.0).round() as i64 * 24;
        if frame >= frames_per_24h {
            continue;
        }
        let t = RationalTime::new(frame as f64, rate).unwrap();
        let timecode = to_timecode(t, Some(rate)).unwrap();
        let round_tripped = from_timecode(&timecode, rate).unwrap();
        assert_eq!(round_tripped, t, "rate {rate} frame {frame} timecode {timecode}");
    }
}
