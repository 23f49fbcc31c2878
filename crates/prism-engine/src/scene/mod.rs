//! Scene data: the prism geometry and its transforms.

mod transforms;
mod vertex;

pub use transforms::{spin_model, Camera, Transforms, SPIN_RADIANS_PER_SEC};
pub use vertex::{Vertex, PRISM_VERTICES};
