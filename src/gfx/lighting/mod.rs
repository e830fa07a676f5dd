//! # Lighting
//!
//! Dynamic lights derived from emissive materials, plus the scene-wide
//! directional sky light.
//!
//! - [`LightCollector`] rebuilds point and spot lights every frame
//! - [`LightAnchorProfile`] decides where on a mesh its light comes from
//! - [`SkyLight`] holds the user-adjustable directional light

pub mod anchor;
pub mod collector;
pub mod lights;

pub use anchor::{LightAnchorProfile, FLASHLIGHT_LENS, GIANT_EYES};
pub use collector::{light_for, LightCollector};
pub use lights::{
    DirectionalLight, Light, LightIntensity, LightPresets, LightSet, PointLight, SkyLight,
    SpotLight,
};
