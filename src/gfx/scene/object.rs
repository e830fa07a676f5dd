use std::{ops::Range, path::PathBuf};

use cgmath::{Matrix4, Rad, Vector3};
use log::{info, warn};

use crate::error::{Result, SceneError};
use crate::gfx::{
    geometry::{parse_obj, MaterialGroup, ParsedMesh},
    lighting::anchor::LightAnchorProfile,
    resources::{material::MaterialProperties, texture_resource::TextureImage},
    scene::vertex::Vertex,
};

/// Name given to the single group of a mesh without `usemtl` directives
pub const IMPLICIT_GROUP: &str = "default";

/// Axis an object rotates about, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationAxis {
    X,
    #[default]
    Y,
    Z,
}

impl RotationAxis {
    pub fn unit(self) -> Vector3<f32> {
        match self {
            RotationAxis::X => Vector3::unit_x(),
            RotationAxis::Y => Vector3::unit_y(),
            RotationAxis::Z => Vector3::unit_z(),
        }
    }
}

/// Position, uniform scale and single-axis rotation of an object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub scale: f32,
    /// Rotation angle in radians
    pub angle: f32,
    pub axis: RotationAxis,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            scale: 1.0,
            angle: 0.0,
            axis: RotationAxis::Y,
        }
    }
}

impl Transform {
    pub fn new(position: Vector3<f32>, scale: f32, angle: f32, axis: RotationAxis) -> Self {
        Self {
            position,
            scale,
            angle,
            axis,
        }
    }

    /// T * R * S
    pub fn matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from_axis_angle(self.axis.unit(), Rad(self.angle));
        let s = Matrix4::from_scale(self.scale);
        t * r * s // Order matters: T * R * S
    }
}

/// One draw call: a vertex range with its material and texture slot
#[derive(Debug, Clone)]
pub struct DrawBatch<'a> {
    pub vertices: Range<u32>,
    pub material: &'a MaterialProperties,
    /// Index into the object's textures, same as the group index
    pub group: usize,
}

/// A loaded mesh placed in the world together with its per-group materials
#[derive(Debug, Clone)]
pub struct SceneObject {
    name: String,
    vertices: Vec<Vertex>,
    groups: Vec<MaterialGroup>,
    /// `groups` as u32 draw ranges, checked at construction
    draw_ranges: Vec<Range<u32>>,
    materials: Vec<MaterialProperties>,
    textures: Vec<TextureImage>,
    transform: Transform,
    anchor: LightAnchorProfile,
    spin: f32,
}

impl SceneObject {
    /// Builds an object from already parsed geometry
    ///
    /// A mesh without groups gets one implicit group spanning all vertices.
    /// Fails with [`SceneError::MaterialCountMismatch`] unless there is exactly
    /// one material per group.
    pub fn new(
        name: impl Into<String>,
        mesh: ParsedMesh,
        materials: Vec<MaterialProperties>,
        transform: Transform,
    ) -> Result<Self> {
        let name = name.into();
        let ParsedMesh { vertices, mut groups } = mesh;

        if groups.is_empty() {
            warn!("{} has no usemtl directives, using one implicit group", name);
            groups.push(MaterialGroup::new(IMPLICIT_GROUP, 0, vertices.len()));
        }

        if materials.len() != groups.len() {
            return Err(SceneError::MaterialCountMismatch {
                object: name,
                groups: groups.len(),
                materials: materials.len(),
            });
        }

        let Some(draw_ranges) = groups.iter().map(draw_range).collect::<Option<Vec<_>>>() else {
            return Err(SceneError::MeshTooLarge {
                object: name,
                vertices: vertices.len(),
            });
        };

        for group in groups.iter().filter(|group| group.is_empty()) {
            warn!("{}: material group '{}' has no vertices", name, group.name);
        }

        Ok(Self {
            name,
            vertices,
            groups,
            draw_ranges,
            materials,
            textures: Vec::new(),
            transform,
            anchor: LightAnchorProfile::Origin,
            spin: 0.0,
        })
    }

    /// Parses the OBJ file, loads one texture per group and validates the counts
    pub fn load(descriptor: &ObjectDescriptor) -> Result<Self> {
        let mesh = parse_obj(&descriptor.obj_path)?;
        let name = descriptor.obj_path.to_string_lossy().into_owned();

        let mut object = Self::new(
            name,
            mesh,
            descriptor.materials.clone(),
            descriptor.transform,
        )?
        .with_anchor(descriptor.anchor)
        .with_spin(descriptor.spin);

        if descriptor.texture_paths.len() != object.groups.len() {
            return Err(SceneError::TextureCountMismatch {
                object: object.name,
                groups: object.groups.len(),
                textures: descriptor.texture_paths.len(),
            });
        }

        object.textures = descriptor
            .texture_paths
            .iter()
            .map(TextureImage::load)
            .collect::<Result<_>>()?;

        info!(
            "Loaded {} ({} vertices, {} groups)",
            object.name,
            object.vertices.len(),
            object.groups.len()
        );
        Ok(object)
    }

    /// Builder pattern: Set where this object's lights come from
    pub fn with_anchor(mut self, anchor: LightAnchorProfile) -> Self {
        self.anchor = anchor;
        self
    }

    /// Builder pattern: Rotate automatically by `spin` radians per frame
    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn groups(&self) -> &[MaterialGroup] {
        &self.groups
    }

    pub fn materials(&self) -> &[MaterialProperties] {
        &self.materials
    }

    /// Materials are editable in place, e.g. to dim a light
    pub fn materials_mut(&mut self) -> &mut [MaterialProperties] {
        &mut self.materials
    }

    pub fn textures(&self) -> &[TextureImage] {
        &self.textures
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn scale(&self) -> f32 {
        self.transform.scale
    }

    pub fn anchor(&self) -> LightAnchorProfile {
        self.anchor
    }

    /// Apply translation
    pub fn move_by(&mut self, dx: f32, dy: f32, dz: f32) {
        self.transform.position += Vector3::new(dx, dy, dz);
    }

    /// Multiplies the current scale by `factor`
    pub fn scale_by(&mut self, factor: f32) {
        self.transform.scale *= factor;
    }

    /// Apply rotation about the configured axis
    pub fn rotate(&mut self, delta: f32) {
        self.transform.angle += delta;
    }

    /// Model matrix from the current transform, recomputed on each call
    pub fn model_matrix(&self) -> Matrix4<f32> {
        self.transform.matrix()
    }

    /// Applies the per-frame automatic rotation
    pub fn advance_frame(&mut self) {
        if self.spin != 0.0 {
            self.rotate(self.spin);
        }
    }

    /// Non-empty groups paired with their materials, in buffer order
    pub fn draw_batches(&self) -> impl Iterator<Item = DrawBatch<'_>> {
        self.draw_ranges
            .iter()
            .zip(&self.materials)
            .enumerate()
            .filter(|(_, (range, _))| !range.is_empty())
            .map(|(index, (range, material))| DrawBatch {
                vertices: range.clone(),
                material,
                group: index,
            })
    }

    pub fn has_light_source(&self) -> bool {
        self.materials.iter().any(|material| material.is_light_source)
    }

    /// Switches every light source material on or off
    ///
    /// Returns false when the object has nothing to toggle.
    pub fn toggle_lights(&mut self) -> bool {
        if !self.has_light_source() {
            return false;
        }
        for material in self.materials.iter_mut().filter(|m| m.is_light_source) {
            material.is_active = !material.is_active;
        }
        true
    }

    /// Changes diffuse reflection of every non-emissive material
    pub fn adjust_diffuse(&mut self, delta: f32) {
        for material in self.materials.iter_mut().filter(|m| !m.is_light_source) {
            material.adjust_diffuse(delta);
        }
    }

    /// Changes specular reflection of every non-emissive material
    pub fn adjust_specular(&mut self, delta: f32) {
        for material in self.materials.iter_mut().filter(|m| !m.is_light_source) {
            material.adjust_specular(delta);
        }
    }
}

/// `None` when the group reaches past what a u32 draw call can address
fn draw_range(group: &MaterialGroup) -> Option<Range<u32>> {
    let start = u32::try_from(group.start).ok()?;
    let end = u32::try_from(group.start.checked_add(group.count)?).ok()?;
    Some(start..end)
}

/// Everything needed to load one scene object from disk
#[derive(Debug, Clone)]
pub struct ObjectDescriptor {
    pub obj_path: PathBuf,
    pub texture_paths: Vec<PathBuf>,
    pub materials: Vec<MaterialProperties>,
    pub transform: Transform,
    pub anchor: LightAnchorProfile,
    pub spin: f32,
}

impl ObjectDescriptor {
    pub fn new(obj_path: impl Into<PathBuf>) -> Self {
        Self {
            obj_path: obj_path.into(),
            texture_paths: Vec::new(),
            materials: Vec::new(),
            transform: Transform::default(),
            anchor: LightAnchorProfile::Origin,
            spin: 0.0,
        }
    }

    /// One texture per material group, in group order
    pub fn textures<P: Into<PathBuf>>(mut self, paths: impl IntoIterator<Item = P>) -> Self {
        self.texture_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// One material per material group, in group order
    pub fn materials(mut self, materials: Vec<MaterialProperties>) -> Self {
        self.materials = materials;
        self
    }

    pub fn position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = Vector3::new(x, y, z);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn rotation(mut self, angle: f32, axis: RotationAxis) -> Self {
        self.transform.angle = angle;
        self.transform.axis = axis;
        self
    }

    pub fn anchor(mut self, anchor: LightAnchorProfile) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }
}
