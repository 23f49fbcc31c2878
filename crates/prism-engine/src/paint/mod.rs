//! Color model.

pub mod color;

pub use color::Color;
