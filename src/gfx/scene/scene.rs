use crate::error::Result;
use crate::gfx::lighting::{LightCollector, LightPresets, LightSet, SkyLight};

use super::object::{ObjectDescriptor, SceneObject};

/// Main scene containing objects and the lights derived from them
#[derive(Debug, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub sky_light: SkyLight,
    collector: LightCollector,
}

impl Scene {
    pub fn new(presets: LightPresets) -> Self {
        Self {
            objects: Vec::new(),
            sky_light: SkyLight::default(),
            collector: LightCollector::new(presets),
        }
    }

    /// Adds an object and returns its index
    pub fn add_object(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Loads an object from disk and adds it to the scene
    pub fn load_object(&mut self, descriptor: &ObjectDescriptor) -> Result<usize> {
        let object = SceneObject::load(descriptor)?;
        Ok(self.add_object(object))
    }

    /// Loads every descriptor in order, stopping at the first failure
    pub fn load_objects(&mut self, descriptors: &[ObjectDescriptor]) -> Result<()> {
        for descriptor in descriptors {
            self.load_object(descriptor)?;
        }
        Ok(())
    }

    pub fn object(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    pub fn object_mut(&mut self, index: usize) -> Option<&mut SceneObject> {
        self.objects.get_mut(index)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gets all object names for display
    pub fn object_names(&self) -> Vec<&str> {
        self.objects.iter().map(|obj| obj.name()).collect()
    }

    /// Applies per-frame automatic motion such as the sky dome's rotation
    pub fn advance_frame(&mut self) {
        for object in &mut self.objects {
            object.advance_frame();
        }
    }

    /// Collects this frame's lights from the current object states
    pub fn collect_lights(&mut self) -> LightSet {
        let (point_lights, spot_lights) = self.collector.collect(&self.objects);
        LightSet {
            directional: self.sky_light.record(),
            point_lights: point_lights.to_vec(),
            spot_lights: spot_lights.to_vec(),
        }
    }

    /// Gets statistics about the scene
    pub fn statistics(&self) -> SceneStatistics {
        SceneStatistics {
            object_count: self.objects.len(),
            total_vertices: self.objects.iter().map(|obj| obj.vertices().len()).sum(),
            total_triangles: self.objects.iter().map(|obj| obj.vertices().len() / 3).sum(),
            light_sources: self
                .objects
                .iter()
                .flat_map(|obj| obj.materials())
                .filter(|material| material.is_light_source)
                .count(),
        }
    }
}

/// Scene statistics for debugging and display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub total_vertices: usize,
    pub total_triangles: usize,
    pub light_sources: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::parse_reader;
    use crate::gfx::resources::material::{Attenuation, MaterialProperties};
    use crate::gfx::scene::object::Transform;
    use cgmath::Vector3;

    fn lamp() -> SceneObject {
        let mesh = parse_reader(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl pole\nf 1 2 3\nusemtl bulb\nf 1 2 3\n".as_bytes(),
        )
        .unwrap();
        SceneObject::new(
            "models/lamp.obj",
            mesh,
            vec![
                MaterialProperties::surface(0.2, 0.8, 32.0),
                MaterialProperties::point_light(Vector3::new(1.0, 0.9, 0.7), Attenuation::default()),
            ],
            Transform::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_statistics() {
        let mut scene = Scene::default();
        scene.add_object(lamp());
        scene.add_object(lamp());

        let stats = scene.statistics();
        assert_eq!(stats.object_count, 2);
        assert_eq!(stats.total_vertices, 12);
        assert_eq!(stats.total_triangles, 4);
        assert_eq!(stats.light_sources, 2);
        assert_eq!(scene.object_names(), vec!["models/lamp.obj", "models/lamp.obj"]);
    }

    #[test]
    fn test_lights_appear_after_toggle() {
        let mut scene = Scene::default();
        let index = scene.add_object(lamp());

        assert!(scene.collect_lights().point_lights.is_empty());
        scene.object_mut(index).unwrap().toggle_lights();

        let lights = scene.collect_lights();
        assert_eq!(lights.point_lights.len(), 1);
        assert_eq!(lights.directional, scene.sky_light.record());
    }

    #[test]
    fn test_collect_lights_is_idempotent() {
        let mut scene = Scene::default();
        scene.add_object(lamp());
        scene.add_object(lamp());
        scene.objects[0].toggle_lights();
        scene.objects[1].toggle_lights();
        scene.objects[1].move_by(3.0, 0.0, 0.0);

        assert_eq!(scene.collect_lights(), scene.collect_lights());
    }

    #[test]
    fn test_advance_frame_spins_objects() {
        let mut scene = Scene::default();
        scene.add_object(lamp().with_spin(0.25));
        scene.add_object(lamp());

        scene.advance_frame();
        scene.advance_frame();

        assert_eq!(scene.objects[0].transform().angle, 0.5);
        assert_eq!(scene.objects[1].transform().angle, 0.0);
    }

    #[test]
    fn test_load_object_propagates_errors() {
        let mut scene = Scene::default();
        let missing = ObjectDescriptor::new("/no/such/model.obj");
        assert!(scene.load_object(&missing).is_err());
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_load_objects_stops_at_first_failure() {
        let dir = std::env::temp_dir();
        let obj = dir.join(format!("nocturne_scene_{}_rock.obj", std::process::id()));
        let png = dir.join(format!("nocturne_scene_{}_rock.png", std::process::id()));
        std::fs::write(&obj, "v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl rock\nf 1 2 3\n").unwrap();
        image::RgbImage::new(2, 2).save(&png).unwrap();

        let rock = ObjectDescriptor::new(&obj)
            .textures([&png])
            .materials(vec![MaterialProperties::surface(0.7, 0.1, 4.0)]);
        let mut scene = Scene::default();
        scene.load_objects(&[rock.clone(), rock.clone().position(5.0, 0.0, 0.0)]).unwrap();
        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.objects[1].transform().position, Vector3::new(5.0, 0.0, 0.0));

        let missing = ObjectDescriptor::new(dir.join("nocturne_scene_missing.obj"));
        let result = scene.load_objects(&[rock.clone(), missing, rock]);
        std::fs::remove_file(&obj).ok();
        std::fs::remove_file(&png).ok();

        assert!(matches!(result, Err(crate::SceneError::FileNotFound { .. })));
        assert_eq!(scene.object_count(), 3);
    }
}
