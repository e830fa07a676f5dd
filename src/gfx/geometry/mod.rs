//! # Mesh Geometry
//!
//! Parsed, immutable mesh data: a flat vertex buffer plus the material groups
//! that partition it.
//!
//! ## Usage
//!
//! ```no_run
//! use nocturne::gfx::geometry::parse_obj;
//!
//! let mesh = parse_obj("models/lamp.obj")?;
//! for group in &mesh.groups {
//!     println!("{}: {} vertices from {}", group.name, group.count, group.start);
//! }
//! # Ok::<(), nocturne::SceneError>(())
//! ```

pub mod obj_parser;

use std::ops::Range;

pub use obj_parser::{parse_obj, parse_reader};

use crate::gfx::scene::vertex::Vertex;

/// A contiguous range of the vertex buffer sharing one material, opened by `usemtl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialGroup {
    /// Material name from the `usemtl` directive
    pub name: String,
    /// First vertex of the group
    pub start: usize,
    /// Number of vertices in the group, may be zero
    pub count: usize,
}

impl MaterialGroup {
    pub fn new(name: &str, start: usize, count: usize) -> Self {
        Self {
            name: name.to_string(),
            start,
            count,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Geometry produced by the OBJ parser
#[derive(Debug, Clone, Default)]
pub struct ParsedMesh {
    /// One entry per face vertex, in face order
    pub vertices: Vec<Vertex>,
    /// Groups in order of first appearance, empty when the file has no `usemtl`
    pub groups: Vec<MaterialGroup>,
}

impl ParsedMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Raw bytes of the vertex buffer for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_range() {
        let group = MaterialGroup::new("glass", 6, 3);
        assert_eq!(group.range(), 6..9);
        assert!(!group.is_empty());
        assert!(MaterialGroup::new("none", 9, 0).is_empty());
    }

    #[test]
    fn test_vertex_bytes_length() {
        let mesh = ParsedMesh {
            vertices: vec![Vertex::default(); 3],
            groups: Vec::new(),
        };
        assert_eq!(mesh.vertex_bytes().len(), 3 * std::mem::size_of::<Vertex>());
        assert_eq!(mesh.triangle_count(), 1);
    }
}
