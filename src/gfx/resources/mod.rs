//! Per-group resources of scene objects
//!
//! Material records and decoded textures, one of each per material group.

pub mod material;
pub mod texture_resource;

// Re-export main types
pub use material::{Attenuation, MaterialProperties, MaterialUniform, SpotCone, NOT_A_SPOTLIGHT};
pub use texture_resource::{PixelFormat, TextureImage};
