//! Error types for scene loading
//!
//! Every failure here is terminal for the load attempt that produced it. The
//! caller is expected to abort scene construction, there is no partial-scene
//! recovery.

use std::{io, path::PathBuf};

/// Errors produced while loading geometry, textures, or assembling scene objects.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Cannot open file: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to load texture {}: {source}", path.display())]
    TextureDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Malformed geometry on line {line}: {reason}")]
    MalformedGeometry { line: usize, reason: String },

    #[error("Object '{object}' has {groups} material groups but {materials} materials")]
    MaterialCountMismatch {
        object: String,
        groups: usize,
        materials: usize,
    },

    #[error("Object '{object}' has {vertices} vertices, more than one draw call can address")]
    MeshTooLarge { object: String, vertices: usize },

    #[error("Object '{object}' has {groups} material groups but {textures} textures")]
    TextureCountMismatch {
        object: String,
        groups: usize,
        textures: usize,
    },
}

impl SceneError {
    /// True for errors caused by the scene setup data rather than by the files on disk.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SceneError::MaterialCountMismatch { .. } | SceneError::TextureCountMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SceneError>;
