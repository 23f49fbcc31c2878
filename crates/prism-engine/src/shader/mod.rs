//! Shader source loading.
//!
//! Shaders are WGSL files read at startup, one file per stage.

mod sources;

pub use sources::{ShaderSources, FRAGMENT_ENTRY, VERTEX_ENTRY};
