//! Light records handed to the renderer each frame
//!
//! Records are derived state with no identity across frames. They are rebuilt
//! from the scene objects every frame and dropped afterwards.

use cgmath::{InnerSpace, Point3, Vector3};

use crate::gfx::resources::material::Attenuation;

/// Ambient/diffuse/specular intensities applied to every light of one kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightIntensity {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
}

impl LightIntensity {
    pub const fn new(ambient: f32, diffuse: f32, specular: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }
}

/// Fixed intensities for lights collected from emissive materials
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightPresets {
    pub point: LightIntensity,
    pub spot: LightIntensity,
}

impl Default for LightPresets {
    fn default() -> Self {
        Self {
            point: LightIntensity::new(0.05, 0.8, 0.5),
            spot: LightIntensity::new(0.05, 0.8, 0.8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub intensity: LightIntensity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point3<f32>,
    pub color: Vector3<f32>,
    pub attenuation: Attenuation,
    pub intensity: LightIntensity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub position: Point3<f32>,
    pub direction: Vector3<f32>,
    pub color: Vector3<f32>,
    pub cut_off: f32,
    pub outer_cut_off: f32,
    pub attenuation: Attenuation,
    pub intensity: LightIntensity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
}

/// Every light active in one frame
#[derive(Debug, Clone, PartialEq)]
pub struct LightSet {
    pub directional: DirectionalLight,
    pub point_lights: Vec<PointLight>,
    pub spot_lights: Vec<SpotLight>,
}

impl LightSet {
    /// Directional light first, then point lights, then spotlights
    pub fn iter(&self) -> impl Iterator<Item = Light> + '_ {
        std::iter::once(Light::Directional(self.directional))
            .chain(self.point_lights.iter().copied().map(Light::Point))
            .chain(self.spot_lights.iter().copied().map(Light::Spot))
    }

    pub fn point_uniforms(&self) -> Vec<PointLightUniform> {
        self.point_lights.iter().map(PointLight::uniform).collect()
    }

    pub fn spot_uniforms(&self) -> Vec<SpotLightUniform> {
        self.spot_lights.iter().map(SpotLight::uniform).collect()
    }
}

/// The scene-wide directional light, aimed from a fixed point high above the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyLight {
    pub source: Point3<f32>,
    pub target: Point3<f32>,
    pub intensity: LightIntensity,
    pub enabled: bool,
}

impl Default for SkyLight {
    fn default() -> Self {
        Self {
            source: Point3::new(0.0, 150.0, 0.0),
            target: Point3::new(0.0, 0.0, 0.0),
            intensity: LightIntensity::new(0.2, 0.02, 0.2),
            enabled: true,
        }
    }
}

impl SkyLight {
    /// Ambient level a re-enabled sky light starts from
    pub const RESET_AMBIENT: f32 = 0.1;

    pub fn direction(&self) -> Vector3<f32> {
        (self.target - self.source).normalize()
    }

    /// Switches ambient lighting on or off, resetting its level
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        self.intensity.ambient = Self::RESET_AMBIENT;
    }

    /// Ignored while the sky light is disabled
    pub fn adjust_ambient(&mut self, delta: f32) {
        if self.enabled {
            self.intensity.ambient = (self.intensity.ambient + delta).clamp(0.0, 1.0);
        }
    }

    pub fn record(&self) -> DirectionalLight {
        let mut intensity = self.intensity;
        if !self.enabled {
            intensity.ambient = 0.0;
        }
        DirectionalLight {
            direction: self.direction(),
            intensity,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLightUniform {
    pub direction: [f32; 3],
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    _padding: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 3],
    pub constant: f32,
    pub color: [f32; 3],
    pub linear: f32,
    pub quadratic: f32,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightUniform {
    pub position: [f32; 3],
    pub constant: f32,
    pub direction: [f32; 3],
    pub linear: f32,
    pub color: [f32; 3],
    pub quadratic: f32,
    pub cut_off: f32,
    pub outer_cut_off: f32,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    _padding: [f32; 3],
}

impl DirectionalLight {
    pub fn uniform(&self) -> DirectionalLightUniform {
        DirectionalLightUniform {
            direction: self.direction.into(),
            ambient: self.intensity.ambient,
            diffuse: self.intensity.diffuse,
            specular: self.intensity.specular,
            _padding: [0.0; 2],
        }
    }
}

impl PointLight {
    pub fn uniform(&self) -> PointLightUniform {
        PointLightUniform {
            position: self.position.into(),
            constant: self.attenuation.constant,
            color: self.color.into(),
            linear: self.attenuation.linear,
            quadratic: self.attenuation.quadratic,
            ambient: self.intensity.ambient,
            diffuse: self.intensity.diffuse,
            specular: self.intensity.specular,
        }
    }
}

impl SpotLight {
    pub fn uniform(&self) -> SpotLightUniform {
        SpotLightUniform {
            position: self.position.into(),
            constant: self.attenuation.constant,
            direction: self.direction.into(),
            linear: self.attenuation.linear,
            color: self.color.into(),
            quadratic: self.attenuation.quadratic,
            cut_off: self.cut_off,
            outer_cut_off: self.outer_cut_off,
            ambient: self.intensity.ambient,
            diffuse: self.intensity.diffuse,
            specular: self.intensity.specular,
            _padding: [0.0; 3],
        }
    }
}
