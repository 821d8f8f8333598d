//! Free functions converting [`crate::RationalTime`] to and from the numeric/textual forms used
//! by editing and broadcast tools.
//!
//! Split one concern per file, the way `dv-toolbox-core::pack` splits `date.rs`/`time.rs`/
//! `util.rs`.

pub mod footage;
pub mod frames;
pub mod seconds;
pub mod time_string;
pub mod timecode;
