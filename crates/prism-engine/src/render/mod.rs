//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into the
//! frame's single render pass via [`RenderTarget`].

mod ctx;
mod prism;

pub use ctx::{RenderCtx, RenderTarget};
pub use prism::PrismRenderer;
