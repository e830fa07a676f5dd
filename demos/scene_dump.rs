//! Loads one OBJ file and prints its material groups and a frame of lighting
//!
//! ```text
//! cargo run --example scene_dump -- models/lamp.obj
//! ```

use anyhow::Context;
use nocturne::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: scene_dump <model.obj>")?;

    let mesh = parse_obj(&path).with_context(|| format!("loading {path}"))?;
    println!(
        "{path}: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    for group in &mesh.groups {
        println!(
            "  {:<24} start {:>8} count {:>8}",
            group.name, group.start, group.count
        );
    }

    // Every group but the last is a plain surface, the last one a lamp
    let group_count = mesh.groups.len().max(1);
    let mut materials = vec![MaterialProperties::surface(0.8, 0.3, 32.0); group_count - 1];
    materials.push(
        MaterialProperties::point_light(Vector3::new(1.0, 0.95, 0.8), Attenuation::default())
            .active(),
    );

    let object = SceneObject::new(&path, mesh, materials, Transform::default())?;
    let mut scene = Scene::default();
    scene.add_object(object);

    let stats = scene.statistics();
    println!(
        "scene: {} objects, {} vertices, {} triangles, {} light sources",
        stats.object_count, stats.total_vertices, stats.total_triangles, stats.light_sources
    );

    let mut viewer = Viewer::new(scene, 1920, 1080);
    let frame = viewer.frame();
    println!(
        "camera at ({:.1}, {:.1}, {:.1})",
        frame.camera_position.x, frame.camera_position.y, frame.camera_position.z
    );
    println!(
        "sky light ambient {:.2}",
        frame.lights.directional.intensity.ambient
    );
    for light in &frame.lights.point_lights {
        println!(
            "point light at ({:.2}, {:.2}, {:.2})",
            light.position.x, light.position.y, light.position.z
        );
    }
    for light in &frame.lights.spot_lights {
        println!(
            "spot light at ({:.2}, {:.2}, {:.2}) facing ({:.2}, {:.2}, {:.2})",
            light.position.x,
            light.position.y,
            light.position.z,
            light.direction.x,
            light.direction.y,
            light.direction.z
        );
    }

    Ok(())
}
