//! # Scene Management Module
//!
//! Scene objects, their transforms and the vertex format they share.
//!
//! ## Key Components
//!
//! - [`Scene`] - Owns the objects and the sky light, collects lights per frame
//! - [`SceneObject`] - One parsed mesh with its materials, textures and transform
//! - [`ObjectDescriptor`] - Builder describing an object to load from disk
//! - [`Vertex`] - Interleaved position, texture coordinate and normal
//!
//! ## Usage
//!
//! ```no_run
//! use nocturne::gfx::scene::{ObjectDescriptor, Scene};
//! use nocturne::gfx::resources::MaterialProperties;
//!
//! let mut scene = Scene::default();
//! scene.load_object(
//!     &ObjectDescriptor::new("models/bed.obj")
//!         .textures(["textures/bed.png"])
//!         .materials(vec![MaterialProperties::surface(0.95, 0.1, 2.0)])
//!         .position(-6.0, 0.3, -18.0)
//!         .scale(2.0),
//! )?;
//! # Ok::<(), nocturne::SceneError>(())
//! ```

pub mod object;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use object::{DrawBatch, ObjectDescriptor, RotationAxis, SceneObject, Transform};
pub use scene::{Scene, SceneStatistics};
pub use vertex::Vertex;
