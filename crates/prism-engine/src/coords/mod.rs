//! Viewport geometry.
//!
//! Sizes are physical pixels, origin top-left. The drawable area is kept at a
//! fixed aspect ratio inside whatever window size the platform gives us.

mod viewport;

pub use viewport::{AspectRatio, Viewport};
