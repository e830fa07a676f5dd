//! Material records for Phong shading and emissive light sources
//!
//! One [`MaterialProperties`] exists per material group of an object, matched
//! by position. A material flagged as a light source turns into a point or
//! spot light every frame while it is active.

use cgmath::{Deg, Vector3};

/// Cone cutoff sentinel meaning "not a spotlight"
pub const NOT_A_SPOTLIGHT: f32 = -1.0;

/// Inverse polynomial falloff `1 / (constant + linear*d + quadratic*d²)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Light intensity multiplier at `distance`
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self::new(1.0, 0.09, 0.032)
    }
}

/// Spot cone given as cosines of the inner and outer half-angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotCone {
    pub cut_off: f32,
    pub outer_cut_off: f32,
}

impl SpotCone {
    pub fn from_degrees(inner: f32, outer: f32) -> Self {
        use cgmath::Angle;
        Self {
            cut_off: Deg(inner).cos(),
            outer_cut_off: Deg(outer).cos(),
        }
    }
}

/// Lighting properties of one material group
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProperties {
    pub emission: Vector3<f32>,
    pub shininess: f32,
    pub diffuse_reflection: Vector3<f32>,
    pub specular_reflection: Vector3<f32>,
    pub is_light_source: bool,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
    /// Cosine of the inner cone half-angle, [`NOT_A_SPOTLIGHT`] for point lights
    pub cut_off: f32,
    /// Cosine of the outer cone half-angle, [`NOT_A_SPOTLIGHT`] for point lights
    pub outer_cut_off: f32,
    /// Local-space facing direction, forward is -Z
    pub direction: Vector3<f32>,
    /// Light sources only shine while active, toggled by user input
    pub is_active: bool,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        let attenuation = Attenuation::default();
        Self {
            emission: Vector3::new(0.0, 0.0, 0.0),
            shininess: 32.0,
            diffuse_reflection: Vector3::new(1.0, 1.0, 1.0),
            specular_reflection: Vector3::new(1.0, 1.0, 1.0),
            is_light_source: false,
            constant: attenuation.constant,
            linear: attenuation.linear,
            quadratic: attenuation.quadratic,
            cut_off: NOT_A_SPOTLIGHT,
            outer_cut_off: NOT_A_SPOTLIGHT,
            direction: Vector3::new(0.0, 0.0, -1.0),
            is_active: false,
        }
    }
}

impl MaterialProperties {
    /// A non-emissive surface with uniform diffuse and specular reflection
    pub fn surface(diffuse: f32, specular: f32, shininess: f32) -> Self {
        Self {
            diffuse_reflection: Vector3::new(diffuse, diffuse, diffuse),
            specular_reflection: Vector3::new(specular, specular, specular),
            shininess,
            ..Default::default()
        }
    }

    /// An emissive material that becomes a point light
    pub fn point_light(emission: Vector3<f32>, attenuation: Attenuation) -> Self {
        Self {
            emission,
            shininess: 1.0,
            is_light_source: true,
            ..Default::default()
        }
        .with_attenuation(attenuation)
    }

    /// An emissive material that becomes a spotlight
    pub fn spot_light(
        emission: Vector3<f32>,
        attenuation: Attenuation,
        cone: SpotCone,
        direction: Vector3<f32>,
    ) -> Self {
        Self {
            cut_off: cone.cut_off,
            outer_cut_off: cone.outer_cut_off,
            direction,
            ..Self::point_light(emission, attenuation)
        }
    }

    /// Builder pattern: Set emissive color
    pub fn with_emission(mut self, r: f32, g: f32, b: f32) -> Self {
        self.emission = Vector3::new(r, g, b);
        self
    }

    /// Builder pattern: Set diffuse reflection per channel
    pub fn with_diffuse(mut self, diffuse: Vector3<f32>) -> Self {
        self.diffuse_reflection = diffuse;
        self
    }

    /// Builder pattern: Set specular reflection per channel
    pub fn with_specular(mut self, specular: Vector3<f32>) -> Self {
        self.specular_reflection = specular;
        self
    }

    /// Builder pattern: Set attenuation terms
    pub fn with_attenuation(mut self, attenuation: Attenuation) -> Self {
        self.constant = attenuation.constant;
        self.linear = attenuation.linear;
        self.quadratic = attenuation.quadratic;
        self
    }

    /// Builder pattern: Start switched on
    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }

    pub fn attenuation(&self) -> Attenuation {
        Attenuation::new(self.constant, self.linear, self.quadratic)
    }

    /// Any cutoff above the sentinel makes this a spotlight
    pub fn is_spotlight(&self) -> bool {
        self.cut_off > NOT_A_SPOTLIGHT
    }

    /// True while this material contributes a light to the scene
    pub fn emits_light(&self) -> bool {
        self.is_light_source && self.is_active
    }

    pub fn adjust_diffuse(&mut self, delta: f32) {
        self.diffuse_reflection = clamp_unit(self.diffuse_reflection, delta);
    }

    pub fn adjust_specular(&mut self, delta: f32) {
        self.specular_reflection = clamp_unit(self.specular_reflection, delta);
    }

    /// Flat record for per-draw upload
    pub fn uniform(&self) -> MaterialUniform {
        MaterialUniform {
            emission: self.emission.into(),
            shininess: self.shininess,
            diffuse_reflection: self.diffuse_reflection.into(),
            is_light_source: self.is_light_source as u32,
            specular_reflection: self.specular_reflection.into(),
            constant: self.constant,
            direction: self.direction.into(),
            linear: self.linear,
            quadratic: self.quadratic,
            cut_off: self.cut_off,
            outer_cut_off: self.outer_cut_off,
            _padding: 0.0,
        }
    }
}

fn clamp_unit(color: Vector3<f32>, delta: f32) -> Vector3<f32> {
    color.map(|channel| (channel + delta).clamp(0.0, 1.0))
}

/// GPU uniform data for materials, 16-byte aligned rows
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub emission: [f32; 3],
    pub shininess: f32,
    pub diffuse_reflection: [f32; 3],
    pub is_light_source: u32,
    pub specular_reflection: [f32; 3],
    pub constant: f32,
    pub direction: [f32; 3],
    pub linear: f32,
    pub quadratic: f32,
    pub cut_off: f32,
    pub outer_cut_off: f32,
    _padding: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let material = MaterialProperties::default();
        assert_eq!(material.emission, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(material.shininess, 32.0);
        assert_eq!(material.cut_off, -1.0);
        assert_eq!(material.direction, Vector3::new(0.0, 0.0, -1.0));
        assert!(!material.is_spotlight());
        assert!(!material.emits_light());
    }

    #[test]
    fn test_spot_light_classification() {
        let spot = MaterialProperties::spot_light(
            Vector3::new(0.0, 2.0, 0.0),
            Attenuation::new(1.0, 0.09, 0.22),
            SpotCone::from_degrees(25.0, 30.0),
            Vector3::new(0.0, 1.0, 1.0),
        );
        assert!(spot.is_spotlight());
        assert!(spot.is_light_source);
        assert!(spot.cut_off > spot.outer_cut_off);
        assert!((spot.cut_off - 25f32.to_radians().cos()).abs() < 1e-6);

        let point = MaterialProperties::point_light(
            Vector3::new(1.0, 0.5, 0.0),
            Attenuation::new(0.0, 0.1, 0.22),
        );
        assert!(!point.is_spotlight());
        assert_eq!(point.attenuation(), Attenuation::new(0.0, 0.1, 0.22));
    }

    #[test]
    fn test_light_needs_activation() {
        let mut lamp = MaterialProperties::point_light(
            Vector3::new(1.0, 0.9, 0.7),
            Attenuation::default(),
        );
        assert!(!lamp.emits_light());
        lamp.is_active = true;
        assert!(lamp.emits_light());
        assert!(MaterialProperties::surface(0.5, 0.5, 8.0).active().is_active);
    }

    #[test]
    fn test_reflection_adjustment_clamps() {
        let mut material = MaterialProperties::surface(0.95, 0.05, 16.0);
        material.adjust_diffuse(0.1);
        material.adjust_specular(-0.1);
        assert_eq!(material.diffuse_reflection, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(material.specular_reflection, Vector3::new(0.0, 0.0, 0.0));

        material.adjust_diffuse(-0.5);
        assert!((material.diffuse_reflection.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_attenuation_factor() {
        let attenuation = Attenuation::new(1.0, 0.0, 1.0);
        assert_eq!(attenuation.factor(0.0), 1.0);
        assert_eq!(attenuation.factor(1.0), 0.5);
    }

    #[test]
    fn test_uniform_is_aligned() {
        assert_eq!(std::mem::size_of::<MaterialUniform>() % 16, 0);
        let uniform = MaterialProperties::default().uniform();
        assert_eq!(uniform.cut_off, NOT_A_SPOTLIGHT);
        assert_eq!(uniform.is_light_source, 0);
    }

    #[test]
    fn test_builder_chain() {
        let material = MaterialProperties::spot_light(
            Vector3::new(1.0, 1.0, 1.0),
            Attenuation::default(),
            SpotCone::from_degrees(12.5, 17.5),
            Vector3::new(0.0, 0.0, -1.0),
        )
        .with_emission(0.2, 0.4, 0.6)
        .with_diffuse(Vector3::new(0.1, 0.2, 0.3))
        .with_specular(Vector3::new(0.7, 0.8, 0.9))
        .with_attenuation(Attenuation::new(1.0, 0.14, 0.07));

        assert_eq!(material.emission, Vector3::new(0.2, 0.4, 0.6));
        assert_eq!(material.diffuse_reflection, Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(material.specular_reflection, Vector3::new(0.7, 0.8, 0.9));
        assert_eq!(material.attenuation(), Attenuation::new(1.0, 0.14, 0.07));
        assert!(material.is_spotlight());
    }
}
