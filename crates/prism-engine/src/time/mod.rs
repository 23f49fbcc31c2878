//! Time subsystem.
//!
//! Provides frame timing without coupling to the runtime:
//! the runtime owns one `FrameClock` and calls `tick()` once per frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
