// src/lib.rs
//! Nocturne scene viewer core
//!
//! OBJ scenes lit by their own lamps and flashlights, explored with a
//! free-flying camera. Built on cgmath, with wgpu and winit types at the edges.

pub mod app;
pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use app::{FrameData, Viewer, ViewerSettings};
pub use error::{Result, SceneError};
