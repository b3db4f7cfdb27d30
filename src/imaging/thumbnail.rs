//! Bounded preview thumbnails for selected images.

use std::path::Path;

use image::{GenericImageView, RgbaImage};

use crate::error::Result;

/// Longest allowed dimension of a preview thumbnail, in pixels
const PREVIEW_MAX: u32 = 250;

/// Decode an image file into a preview-sized RGBA thumbnail
///
/// Aspect ratio is preserved and the image is only ever shrunk; a source
/// already inside the bound keeps its native size.
pub fn load_preview(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path)?;

    let bounded = if decoded.width() <= PREVIEW_MAX && decoded.height() <= PREVIEW_MAX {
        decoded
    } else {
        decoded.thumbnail(PREVIEW_MAX, PREVIEW_MAX)
    };

    Ok(bounded.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    /// Write a solid test image to `dir` and return its path
    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(width, height, Rgb([10, 120, 200]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_large_image_is_bounded_preserving_aspect() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "wide.png", 500, 300);

        let preview = load_preview(&path).unwrap();
        assert_eq!(preview.dimensions(), (250, 150));
    }

    #[test]
    fn test_small_image_is_never_upscaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "small.png", 120, 80);

        let preview = load_preview(&path).unwrap();
        assert_eq!(preview.dimensions(), (120, 80));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_preview(Path::new("/nonexistent/photo.png")).is_err());
    }

    #[test]
    fn test_undecodable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.png");
        std::fs::write(&path, b"not an image at all").unwrap();

        assert!(load_preview(&path).is_err());
    }
}
