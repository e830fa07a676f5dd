//! Texture decoding for material groups
//!
//! Decodes image files into tightly packed pixel data ready to hand to the
//! rendering backend. Images are flipped vertically on load since OBJ texture
//! coordinates put the origin at the bottom-left corner.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use log::info;

use crate::error::{Result, SceneError};

/// Channel layout of decoded pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Decoded texture held in CPU memory
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    /// Loads and decodes the image at `path`
    ///
    /// Images with an alpha channel keep it, everything else is converted to RGB.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| SceneError::TextureDecode {
                path: path.to_path_buf(),
                source,
            })?
            .flipv();

        let texture = Self::from_image(path, image);
        info!(
            "{} {:?} {}x{}",
            path.display(),
            texture.format,
            texture.width,
            texture.height
        );
        Ok(texture)
    }

    fn from_image(path: &Path, image: DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());
        let (format, pixels) = if image.color().has_alpha() {
            (PixelFormat::Rgba8, image.into_rgba8().into_raw())
        } else {
            (PixelFormat::Rgb8, image.into_rgb8().into_raw())
        };

        Self {
            path: path.to_path_buf(),
            width,
            height,
            format,
            pixels,
        }
    }

    /// Row-major RGBA bytes regardless of the source layout
    pub fn to_rgba(&self) -> Vec<u8> {
        match self.format {
            PixelFormat::Rgba8 => self.pixels.clone(),
            PixelFormat::Rgb8 => self
                .pixels
                .chunks_exact(3)
                .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], u8::MAX])
                .collect(),
        }
    }

    /// wgpu has no 24-bit formats, so uploads always go through [`Self::to_rgba`]
    pub const UPLOAD_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Texture extent for backend texture creation
    pub fn extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn fixture(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("nocturne_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_load_rgba_flips_rows() {
        let _ = env_logger::builder().is_test(true).try_init();
        let path = fixture("rgba.png");
        let mut image = RgbaImage::new(1, 2);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(0, 1, Rgba([0, 0, 255, 128]));
        image.save(&path).unwrap();

        let texture = TextureImage::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(texture.format, PixelFormat::Rgba8);
        assert_eq!((texture.width, texture.height), (1, 2));
        // Bottom row of the file comes first after the flip
        assert_eq!(&texture.pixels[..4], &[0, 0, 255, 128]);
        assert_eq!(&texture.pixels[4..], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_load_rgb_expands_to_rgba() {
        let path = fixture("rgb.png");
        RgbImage::from_pixel(2, 2, Rgb([10, 20, 30])).save(&path).unwrap();

        let texture = TextureImage::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(texture.format, PixelFormat::Rgb8);
        assert_eq!(texture.pixels.len(), 12);
        let rgba = texture.to_rgba();
        assert_eq!(rgba.len(), 16);
        assert_eq!(&rgba[..4], &[10, 20, 30, 255]);
        assert_eq!(texture.extent().depth_or_array_layers, 1);
    }

    #[test]
    fn test_missing_texture_is_decode_error() {
        let err = TextureImage::load(fixture("missing.png")).unwrap_err();
        assert!(matches!(err, SceneError::TextureDecode { .. }));
    }

    #[test]
    fn test_garbage_texture_is_decode_error() {
        let path = fixture("garbage.png");
        std::fs::write(&path, b"not an image").unwrap();

        let err = TextureImage::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, SceneError::TextureDecode { .. }));
    }
}
