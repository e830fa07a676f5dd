//! # Nocturne Prelude
//!
//! Commonly used types for building and driving a scene.
//!
//! ## Usage
//!
//! ```no_run
//! use nocturne::prelude::*;
//!
//! let mut scene = Scene::default();
//! scene.load_object(
//!     &ObjectDescriptor::new("models/flashlight.obj")
//!         .textures(["textures/metal.png", "textures/lens.png"])
//!         .materials(vec![
//!             MaterialProperties::surface(0.6, 0.9, 64.0),
//!             MaterialProperties::spot_light(
//!                 Vector3::new(1.0, 1.0, 0.9),
//!                 Attenuation::default(),
//!                 SpotCone::from_degrees(12.5, 17.5),
//!                 Vector3::new(0.0, 0.0, -1.0),
//!             ),
//!         ])
//!         .anchor(FLASHLIGHT_LENS),
//! )?;
//!
//! let mut viewer = Viewer::new(scene, 1920, 1080);
//! let frame = viewer.frame();
//! # Ok::<(), SceneError>(())
//! ```

// Re-export core application types
pub use crate::app::{FrameData, Viewer, ViewerSettings};
pub use crate::error::{Result, SceneError};

// Re-export graphics and scene types
pub use crate::gfx::camera::{Camera, CameraManager, FlyCamera, FlyCameraSettings, MovementInput};
pub use crate::gfx::geometry::{parse_obj, parse_reader, MaterialGroup, ParsedMesh};
pub use crate::gfx::lighting::{
    LightAnchorProfile, LightCollector, LightPresets, LightSet, PointLight, SkyLight, SpotLight,
    FLASHLIGHT_LENS, GIANT_EYES,
};
pub use crate::gfx::resources::{Attenuation, MaterialProperties, SpotCone, TextureImage};
pub use crate::gfx::scene::{ObjectDescriptor, RotationAxis, Scene, SceneObject, Transform, Vertex};

// Re-export math types
pub use cgmath::{Deg, Point3, Rad, Vector3};
