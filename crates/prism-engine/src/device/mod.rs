//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - keeping depth / multisample attachments in step with the surface size
//! - acquiring frames and providing encoders/views for rendering
//! - decoding and logging device debug messages

mod attachments;
pub mod debug;
mod gpu;
mod surface;

pub use attachments::{FrameAttachments, DEPTH_FORMAT};
pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
