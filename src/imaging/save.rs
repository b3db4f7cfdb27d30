//! PNG export of generated QR rasters.

use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::Result;

/// Write a QR raster to `path` as lossless PNG
///
/// The format is fixed regardless of the extension typed into the save
/// dialog.
pub fn save_png(raster: &RgbImage, path: &Path) -> Result<()> {
    raster.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
