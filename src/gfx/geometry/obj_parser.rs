//! Wavefront OBJ subset parser
//!
//! Supports `v`, `vt`, `vn`, `usemtl` and triangular `f` directives. Every
//! face vertex becomes its own entry in the output buffer, there is no
//! de-duplication. Material groups are opened by `usemtl` and closed by the
//! next `usemtl` or the end of the file.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::SplitWhitespace,
};

use log::debug;

use super::{MaterialGroup, ParsedMesh};
use crate::error::{Result, SceneError};
use crate::gfx::scene::vertex::{Vertex, DEFAULT_NORMAL};

/// Parses the OBJ file at `path`.
///
/// Fails with [`SceneError::FileNotFound`] if the file cannot be opened and with
/// [`SceneError::MalformedGeometry`] if a face references undeclared data.
pub fn parse_obj(path: impl AsRef<Path>) -> Result<ParsedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SceneError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    parse_reader(BufReader::new(file))
}

/// Parses OBJ text from any buffered reader.
pub fn parse_reader(reader: impl BufRead) -> Result<ParsedMesh> {
    let mut parser = ObjParser::default();

    for (index, line) in reader.lines().enumerate() {
        parser.parse_line(index + 1, &line?)?;
    }

    Ok(parser.finish())
}

#[derive(Default)]
struct ObjParser {
    positions: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    normals: Vec<[f32; 3]>,
    vertices: Vec<Vertex>,
    groups: Vec<MaterialGroup>,
    open_group: Option<usize>,
}

impl ObjParser {
    fn parse_line(&mut self, line: usize, text: &str) -> Result<()> {
        let mut tokens = text.split_whitespace();
        let Some(directive) = tokens.next() else {
            return Ok(());
        };

        match directive {
            "v" => {
                self.positions.push(parse_floats(line, &mut tokens)?);
            }
            "vt" => {
                // A third `w` component is ignored
                self.tex_coords.push(parse_floats(line, &mut tokens)?);
            }
            "vn" => {
                self.normals.push(parse_floats(line, &mut tokens)?);
            }
            "usemtl" => {
                let name = tokens.next().ok_or_else(|| SceneError::MalformedGeometry {
                    line,
                    reason: "usemtl without a material name".to_string(),
                })?;
                self.open_group(name);
            }
            "f" => {
                let corners: Vec<&str> = tokens.collect();
                if corners.len() != 3 {
                    return Err(SceneError::MalformedGeometry {
                        line,
                        reason: format!(
                            "only triangular faces are supported, found {} vertices",
                            corners.len()
                        ),
                    });
                }
                for corner in corners {
                    let vertex = self.resolve_corner(line, corner)?;
                    self.vertices.push(vertex);
                }
            }
            // Comments, object names, smoothing groups, mtllib and friends
            _ => {}
        }

        Ok(())
    }

    fn open_group(&mut self, name: &str) {
        self.close_group();

        let start = self.vertices.len();
        debug!("{} starts at vertex {}", name, start);
        self.groups.push(MaterialGroup::new(name, start, 0));
        self.open_group = Some(self.groups.len() - 1);
    }

    fn close_group(&mut self) {
        if let Some(index) = self.open_group.take() {
            let group = &mut self.groups[index];
            group.count = self.vertices.len() - group.start;
        }
    }

    /// Resolves one `v`, `v/vt`, `v//vn` or `v/vt/vn` token into a vertex.
    fn resolve_corner(&self, line: usize, corner: &str) -> Result<Vertex> {
        let mut indices = [0usize; 3];
        let mut segments = corner.split('/');

        for slot in indices.iter_mut() {
            match segments.next() {
                Some("") | None => {}
                Some(segment) => {
                    *slot = segment.parse().map_err(|_| SceneError::MalformedGeometry {
                        line,
                        reason: format!("invalid face index '{}' in '{}'", segment, corner),
                    })?;
                }
            }
        }
        if segments.next().is_some() {
            return Err(SceneError::MalformedGeometry {
                line,
                reason: format!("too many index components in '{}'", corner),
            });
        }

        let [position, tex_coord, normal] = indices;
        if position == 0 {
            return Err(SceneError::MalformedGeometry {
                line,
                reason: format!("face vertex '{}' has no position index", corner),
            });
        }

        Ok(Vertex {
            position: lookup(line, "position", &self.positions, position)?,
            tex_coord: match tex_coord {
                0 => [0.0, 0.0],
                index => lookup(line, "texture coordinate", &self.tex_coords, index)?,
            },
            normal: match normal {
                0 => DEFAULT_NORMAL,
                index => lookup(line, "normal", &self.normals, index)?,
            },
        })
    }

    fn finish(mut self) -> ParsedMesh {
        self.close_group();
        ParsedMesh {
            vertices: self.vertices,
            groups: self.groups,
        }
    }
}

/// 1-based lookup into one of the declared attribute lists.
fn lookup<T: Copy>(line: usize, kind: &str, values: &[T], index: usize) -> Result<T> {
    values
        .get(index - 1)
        .copied()
        .ok_or_else(|| SceneError::MalformedGeometry {
            line,
            reason: format!(
                "{} index {} out of range ({} declared)",
                kind,
                index,
                values.len()
            ),
        })
}

fn parse_floats<const N: usize>(line: usize, tokens: &mut SplitWhitespace<'_>) -> Result<[f32; N]> {
    let mut values = [0.0; N];
    for value in values.iter_mut() {
        let token = tokens.next().ok_or_else(|| SceneError::MalformedGeometry {
            line,
            reason: format!("expected {} components", N),
        })?;
        *value = token.parse().map_err(|_| SceneError::MalformedGeometry {
            line,
            reason: format!("invalid number '{}'", token),
        })?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ParsedMesh> {
        parse_reader(text.as_bytes())
    }

    #[test]
    fn test_single_triangle_single_group() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl foo\nf 1 2 3\n").unwrap();

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.vertices[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[2].position, [0.0, 1.0, 0.0]);
        assert_eq!(mesh.groups, vec![MaterialGroup::new("foo", 0, 3)]);
    }

    #[test]
    fn test_missing_tex_coord_defaults_to_zero() {
        let mesh = parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0.5 0.5\nvn 0 0 1\nf 1//1 2//1 3//1\n",
        )
        .unwrap();

        for vertex in &mesh.vertices {
            assert_eq!(vertex.tex_coord, [0.0, 0.0]);
            assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_missing_normal_defaults_to_up() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0.25 0.75\nf 1/1 2/1 3/1\n").unwrap();

        assert_eq!(mesh.vertices[0].tex_coord, [0.25, 0.75]);
        assert_eq!(mesh.vertices[0].normal, DEFAULT_NORMAL);
    }

    #[test]
    fn test_full_index_triplets() {
        let mesh = parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\nvn 0 0 1\nvn 0 0 -1\n\
             f 1/1/1 2/2/2 3/3/1\n",
        )
        .unwrap();

        assert_eq!(mesh.vertices[1].tex_coord, [1.0, 0.0]);
        assert_eq!(mesh.vertices[1].normal, [0.0, 0.0, -1.0]);
        assert_eq!(mesh.vertices[2].tex_coord, [0.0, 1.0]);
    }

    #[test]
    fn test_consecutive_groups_partition_buffer() {
        let mesh = parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\n\
             usemtl first\nf 1 2 3\nf 2 4 3\n\
             usemtl second\nf 1 2 4\n",
        )
        .unwrap();

        assert_eq!(mesh.groups.len(), 2);
        let first = &mesh.groups[0];
        let second = &mesh.groups[1];
        assert_eq!((first.name.as_str(), first.start, first.count), ("first", 0, 6));
        assert_eq!((second.name.as_str(), second.start, second.count), ("second", 6, 3));
        assert_eq!(first.count + second.count, mesh.vertex_count());
        assert_eq!(first.range().end, second.range().start);
    }

    #[test]
    fn test_empty_group_is_kept() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl a\nusemtl b\nf 1 2 3\n").unwrap();

        assert_eq!(mesh.groups.len(), 2);
        assert_eq!(mesh.groups[0].count, 0);
        assert!(mesh.groups[0].is_empty());
        assert_eq!(mesh.groups[1].start, 0);
        assert_eq!(mesh.groups[1].count, 3);
    }

    #[test]
    fn test_faces_before_first_usemtl_are_ungrouped() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\nusemtl late\nf 3 2 1\n").unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.groups, vec![MaterialGroup::new("late", 3, 3)]);
    }

    #[test]
    fn test_no_usemtl_yields_no_groups() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        assert!(mesh.groups.is_empty());
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn test_ignores_unknown_directives() {
        let mesh = parse(
            "# comment\nmtllib scene.mtl\no thing\n\nv 0 0 0\nv 1 0 0\nv 0 1 0\ns off\ng body\nf 1 2 3\n",
        )
        .unwrap();

        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_position_out_of_range_fails() {
        let err = parse("v 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap_err();

        match err {
            SceneError::MalformedGeometry { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("position index 3"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tex_coord_out_of_range_fails() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1 2/1 3/1\n").unwrap_err();
        assert!(matches!(err, SceneError::MalformedGeometry { line: 4, .. }));
    }

    #[test]
    fn test_forward_reference_fails() {
        // Faces may only reference vertices declared above them
        let err = parse("v 0 0 0\nf 1 2 3\nv 1 0 0\nv 0 1 0\n").unwrap_err();
        assert!(matches!(err, SceneError::MalformedGeometry { line: 2, .. }));
    }

    #[test]
    fn test_quad_face_is_rejected() {
        let err = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nf 1 2 4 3\n").unwrap_err();
        assert!(matches!(err, SceneError::MalformedGeometry { line: 5, .. }));
    }

    #[test]
    fn test_zero_and_garbage_indices_are_rejected() {
        assert!(matches!(
            parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 2 3\n"),
            Err(SceneError::MalformedGeometry { .. })
        ));
        assert!(matches!(
            parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf a 2 3\n"),
            Err(SceneError::MalformedGeometry { .. })
        ));
        assert!(matches!(
            parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1/1 2 3\n"),
            Err(SceneError::MalformedGeometry { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_obj("/definitely/not/here.obj").unwrap_err();
        assert!(matches!(err, SceneError::FileNotFound { .. }));
    }

    #[test]
    fn test_parse_from_disk() {
        let path = std::env::temp_dir().join(format!("nocturne_parse_{}.obj", std::process::id()));
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl disk\nf 1 2 3\n").unwrap();

        let mesh = parse_obj(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(mesh.groups[0].name, "disk");
        assert_eq!(mesh.vertex_count(), 3);
    }
}
