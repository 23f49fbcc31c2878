//! Prism engine crate.
//!
//! Owns the platform + GPU runtime pieces: window and event loop, wgpu device
//! and surface, input and frame timing, letterboxed viewport, and the prism
//! renderer driven by the demo binary.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod shader;
