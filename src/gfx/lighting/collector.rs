//! Per-frame light collection
//!
//! Scans every object's materials for active light sources and turns each one
//! into a point or spot light positioned by the object's current transform.
//! Output order is object order, then material order within an object.

use crate::gfx::resources::material::MaterialProperties;
use crate::gfx::scene::object::SceneObject;

use super::anchor::LightAnchorProfile;
use super::lights::{Light, LightPresets, PointLight, SpotLight};

/// Rebuilds the point and spot light lists from the scene objects
#[derive(Debug, Default)]
pub struct LightCollector {
    pub presets: LightPresets,
    point_lights: Vec<PointLight>,
    spot_lights: Vec<SpotLight>,
}

impl LightCollector {
    pub fn new(presets: LightPresets) -> Self {
        Self {
            presets,
            point_lights: Vec::new(),
            spot_lights: Vec::new(),
        }
    }

    /// Clears the previous frame's lights and collects the current ones
    pub fn collect(&mut self, objects: &[SceneObject]) -> (&[PointLight], &[SpotLight]) {
        self.point_lights.clear();
        self.spot_lights.clear();

        for object in objects {
            for material in object.materials() {
                if !material.emits_light() {
                    continue;
                }
                match light_for(object, material, &self.presets) {
                    Light::Spot(light) => self.spot_lights.push(light),
                    Light::Point(light) => self.point_lights.push(light),
                    Light::Directional(_) => {}
                }
            }
        }

        (&self.point_lights, &self.spot_lights)
    }

    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }

    pub fn spot_lights(&self) -> &[SpotLight] {
        &self.spot_lights
    }
}

/// Builds the light a single emissive material of `object` produces this frame
pub fn light_for(object: &SceneObject, material: &MaterialProperties, presets: &LightPresets) -> Light {
    let model = object.model_matrix();
    let anchor = object.anchor();

    if material.is_spotlight() {
        Light::Spot(SpotLight {
            position: anchor.position(&model),
            direction: anchor.direction(&model, material),
            color: material.emission,
            cut_off: material.cut_off,
            outer_cut_off: material.outer_cut_off,
            attenuation: material.attenuation(),
            intensity: presets.spot,
        })
    } else {
        Light::Point(PointLight {
            position: LightAnchorProfile::Origin.position(&model),
            color: material.emission,
            attenuation: material.attenuation(),
            intensity: presets.point,
        })
    }
}
