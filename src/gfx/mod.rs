//! # Graphics Module
//!
//! Renderer-agnostic scene state for the viewer: meshes, materials, lights and
//! the camera. Everything here produces plain data and `bytemuck` uniforms; GPU
//! submission is left to the caller.
//!
//! ## Architecture Overview
//!
//! - **Camera System** ([`camera`]) - Free-flying yaw/pitch camera with soft bounds
//! - **Geometry** ([`geometry`]) - OBJ parsing into a flat vertex buffer with material groups
//! - **Lighting** ([`lighting`]) - Point and spot lights derived from emissive materials
//! - **Resource Management** ([`resources`]) - Materials and decoded textures
//! - **Scene Management** ([`scene`]) - Objects, transforms and per-frame updates
//!
//! ## Usage
//!
//! ```no_run
//! use nocturne::gfx::{scene::{ObjectDescriptor, Scene}, resources::MaterialProperties};
//!
//! let mut scene = Scene::default();
//! scene.load_object(
//!     &ObjectDescriptor::new("models/ground.obj")
//!         .textures(["textures/grass.png"])
//!         .materials(vec![MaterialProperties::surface(0.8, 0.1, 8.0)]),
//! )?;
//! let lights = scene.collect_lights();
//! # Ok::<(), nocturne::SceneError>(())
//! ```

pub mod camera;
pub mod geometry;
pub mod lighting;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::fly_camera::FlyCamera;
pub use lighting::LightCollector;
pub use scene::Scene;
