//! # Vertex Data Structures
//!
//! Vertex format shared by the OBJ parser and the rendering backend. Vertices
//! are interleaved position / texture coordinate / normal and never change after
//! parsing.

/// Normal assigned to face vertices that do not reference one.
pub const DEFAULT_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// A 3D vertex with position, texture coordinate and normal data.
///
/// # Memory Layout
///
/// `#[repr(C)]` keeps the layout stable so the buffer can be handed to the GPU
/// as raw bytes with `bytemuck::cast_slice`.
///
/// # Examples
///
/// ```no_run
/// use nocturne::gfx::scene::vertex::Vertex;
///
/// let vertex = Vertex::new([0.0, 1.0, 0.0], [0.5, 0.5], [0.0, 1.0, 0.0]);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// Texture coordinates [u, v], (0, 0) when the face vertex has none
    pub tex_coord: [f32; 2],
    /// Normal vector [nx, ny, nz], [`DEFAULT_NORMAL`] when the face vertex has none
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: [f32; 3], tex_coord: [f32; 2], normal: [f32; 3]) -> Self {
        Self {
            position,
            tex_coord,
            normal,
        }
    }

    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Attribute 0: Position (Float32x3)
    /// - Attribute 1: Texture coordinate (Float32x2)
    /// - Attribute 2: Normal (Float32x3)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[2].offset, 20);
    }

    #[test]
    fn test_cast_to_bytes() {
        let vertices = [Vertex::new([1.0, 2.0, 3.0], [0.0, 0.0], DEFAULT_NORMAL); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 64);
    }
}
