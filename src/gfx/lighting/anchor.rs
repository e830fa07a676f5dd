//! Light anchor profiles
//!
//! Different meshes share the same material schema but emit their light from
//! different places: a lamp from its origin, a statue from its eye sockets, a
//! flashlight from its lens. The profile is chosen when the object is built and
//! maps local-space anchor points to a world-space position and facing.

use cgmath::{InnerSpace, Matrix4, Point3, Transform, Vector3};

use crate::gfx::resources::material::MaterialProperties;

/// Eye anchors of the giant statue model
pub const GIANT_EYES: LightAnchorProfile = LightAnchorProfile::EyePair {
    centroid: Point3::new(0.03, 8.79846, 1.0),
    side: Point3::new(0.75865, 8.79846, 1.0),
};

/// Lens anchors of the flashlight model
pub const FLASHLIGHT_LENS: LightAnchorProfile = LightAnchorProfile::Beam {
    base: Point3::new(-0.0432864, -0.05, -0.274723),
    front: Point3::new(-0.0432864, -0.05, -0.574723),
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LightAnchorProfile {
    /// Light sits at the object's local origin and faces along the material direction
    #[default]
    Origin,
    /// Light sits between two eyes and looks perpendicular to the line joining them
    EyePair {
        centroid: Point3<f32>,
        side: Point3<f32>,
    },
    /// Light sits at `base` and shines towards `front`
    Beam {
        base: Point3<f32>,
        front: Point3<f32>,
    },
}

impl LightAnchorProfile {
    /// World-space position of the light for an object with the given model matrix
    pub fn position(&self, model: &Matrix4<f32>) -> Point3<f32> {
        match *self {
            LightAnchorProfile::Origin => model.transform_point(Point3::new(0.0, 0.0, 0.0)),
            LightAnchorProfile::EyePair { centroid, .. } => model.transform_point(centroid),
            LightAnchorProfile::Beam { base, .. } => model.transform_point(base),
        }
    }

    /// World-space unit facing direction
    pub fn direction(&self, model: &Matrix4<f32>, material: &MaterialProperties) -> Vector3<f32> {
        match *self {
            LightAnchorProfile::Origin => model.transform_vector(material.direction).normalize(),
            LightAnchorProfile::EyePair { centroid, side } => {
                let across = model.transform_point(side) - model.transform_point(centroid);
                across.cross(Vector3::unit_y()).normalize()
            }
            LightAnchorProfile::Beam { base, front } => {
                (model.transform_point(front) - model.transform_point(base)).normalize()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Rad, SquareMatrix};

    fn assert_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_origin_profile_follows_translation() {
        let model = Matrix4::from_translation(Vector3::new(70.0, 0.0, -10.0));
        let material = MaterialProperties::default();

        assert_eq!(
            LightAnchorProfile::Origin.position(&model),
            Point3::new(70.0, 0.0, -10.0)
        );
        assert_close(
            LightAnchorProfile::Origin.direction(&model, &material),
            Vector3::new(0.0, 0.0, -1.0),
        );
    }

    #[test]
    fn test_eye_pair_faces_forward() {
        let model = Matrix4::identity();
        let direction = GIANT_EYES.direction(&model, &MaterialProperties::default());
        assert_close(direction, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(GIANT_EYES.position(&model), Point3::new(0.03, 8.79846, 1.0));
    }

    #[test]
    fn test_eye_pair_turns_with_object() {
        // Quarter turn about Y swings +Z facing onto +X
        let model = Matrix4::from_angle_y(Rad(std::f32::consts::FRAC_PI_2));
        let direction = GIANT_EYES.direction(&model, &MaterialProperties::default());
        assert_close(direction, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_beam_ignores_scale() {
        let model = Matrix4::from_translation(Vector3::new(-9.7, 3.67, 14.5)) * Matrix4::from_scale(3.0);
        let direction = FLASHLIGHT_LENS.direction(&model, &MaterialProperties::default());
        assert_close(direction, Vector3::new(0.0, 0.0, -1.0));

        let position = FLASHLIGHT_LENS.position(&model);
        assert!((position.z - (14.5 - 3.0 * 0.274723)).abs() < 1e-4);
    }
}
