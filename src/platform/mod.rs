//! Platform abstraction layer
//!
//! Handles the browser/native differences the core must not see:
//! - Frame timing and fixed-interval timers
//! - Pointer coordinates to play-field mapping

pub mod input;
pub mod time;

pub use input::pointer_to_field;
pub use time::{FixedInterval, FrameClock};
