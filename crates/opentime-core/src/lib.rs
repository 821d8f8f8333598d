//! Rational-time arithmetic and SMPTE/wall-clock timecode codecs for post-production pipelines.
//!
//! Four cooperating components, leaves first:
//!
//! - [`codec`] — free functions converting between [`RationalTime`] and frame numbers, seconds,
//!   SMPTE timecode strings, and wall-clock time strings.
//! - [`TimeTransform`] — a 1-D affine transform applied to a [`RationalTime`], another
//!   `TimeTransform`, or a [`TimeRange`].
//! - [`TimeRange`] — a half-open interval of time built from two [`RationalTime`]s.
//! - [`RationalTime`] — an instant `value / rate` seconds after time zero.
//!
//! Every type here is a plain, `Copy`-able value with no interior mutability, no I/O, and no
//! shared state: construction and arithmetic are pure functions.

pub mod codec;
pub mod error;
pub mod rates;
pub mod rational_time;
pub mod time_range;
pub mod time_transform;

pub use error::{Error, Result};
pub use rational_time::RationalTime;
pub use time_range::{BoundStrategy, TimeRange};
pub use time_transform::TimeTransform;
