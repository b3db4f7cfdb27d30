//! QR code encoder

use image::{Rgb, RgbImage};
use qrcode::{EcLevel, QrCode};

use crate::error::Result;

/// Device pixels per symbol module
const MODULE_SIZE: u32 = 8;

/// Quiet-zone width in modules on each side of the symbol
const QUIET_ZONE: u32 = 2;

/// QR code encoder with fixed symbol parameters
///
/// Version selection is automatic, error correction is level M (about 15%
/// of the symbol recoverable). Only the two render colors vary between
/// calls; they must differ for the symbol to stay scannable.
pub struct QrEncoder {
    /// Error correction level
    ec_level: EcLevel,
    /// Side length of one module, in pixels
    module_size: u32,
    /// Blank border around the symbol, in modules
    quiet_zone: u32,
}

impl QrEncoder {
    /// Create an encoder with the application's fixed parameters
    pub fn new() -> Self {
        Self {
            ec_level: EcLevel::M,
            module_size: MODULE_SIZE,
            quiet_zone: QUIET_ZONE,
        }
    }

    /// Encode `data` into a colored QR raster
    ///
    /// `fill` paints the dark modules, `background` everything else
    /// including the quiet zone.
    pub fn encode(&self, data: &str, fill: Rgb<u8>, background: Rgb<u8>) -> Result<RgbImage> {
        let code = QrCode::with_error_correction_level(data, self.ec_level)?;
        Ok(self.render(&code, fill, background))
    }

    /// Paint the module grid into an RGB image
    ///
    /// The `qrcode` crate's own renderer hardcodes a 4-module quiet zone,
    /// so the grid is walked directly instead.
    fn render(&self, code: &QrCode, fill: Rgb<u8>, background: Rgb<u8>) -> RgbImage {
        let modules = code.width() as u32;
        let colors = code.to_colors();
        let size = (modules + 2 * self.quiet_zone) * self.module_size;
        let mut raster = RgbImage::from_pixel(size, size, background);

        for (index, module) in colors.iter().enumerate() {
            if *module != qrcode::Color::Dark {
                continue;
            }

            let left = (index as u32 % modules + self.quiet_zone) * self.module_size;
            let top = (index as u32 / modules + self.quiet_zone) * self.module_size;
            for y in top..top + self.module_size {
                for x in left..left + self.module_size {
                    raster.put_pixel(x, y, fill);
                }
            }
        }

        raster
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const CYAN: Rgb<u8> = Rgb([0, 255, 255]);

    #[test]
    fn test_raster_dimensions_follow_symbol_size() {
        let payload = "Image Path: /home/user/photo.jpg";
        let raster = QrEncoder::new().encode(payload, BLACK, WHITE).unwrap();

        let code = QrCode::with_error_correction_level(payload, EcLevel::M).unwrap();
        let expected = (code.width() as u32 + 2 * QUIET_ZONE) * MODULE_SIZE;
        assert_eq!(raster.width(), expected);
        assert_eq!(raster.height(), expected);
    }

    #[test]
    fn test_quiet_zone_is_background_colored() {
        let raster = QrEncoder::new()
            .encode("Image Path: /tmp/a.png", BLACK, WHITE)
            .unwrap();

        let border = QUIET_ZONE * MODULE_SIZE;
        for offset in 0..border {
            assert_eq!(*raster.get_pixel(offset, offset), WHITE);
            assert_eq!(*raster.get_pixel(raster.width() - 1 - offset, offset), WHITE);
        }
    }

    #[test]
    fn test_finder_corner_uses_fill_color() {
        let raster = QrEncoder::new()
            .encode("Image Path: /tmp/a.png", CYAN, BLACK)
            .unwrap();

        // The top-left module of any symbol is part of a finder pattern
        // and therefore dark.
        let border = QUIET_ZONE * MODULE_SIZE;
        assert_eq!(*raster.get_pixel(border, border), CYAN);
        assert_eq!(*raster.get_pixel(border + MODULE_SIZE - 1, border + MODULE_SIZE - 1), CYAN);
    }

    #[test]
    fn test_themed_raster_contains_only_the_color_pair() {
        let raster = QrEncoder::new()
            .encode("Image Path: /tmp/a.png", CYAN, BLACK)
            .unwrap();

        let mut seen_fill = false;
        let mut seen_background = false;
        for pixel in raster.pixels() {
            match *pixel {
                p if p == CYAN => seen_fill = true,
                p if p == BLACK => seen_background = true,
                other => panic!("unexpected pixel color: {other:?}"),
            }
        }
        assert!(seen_fill);
        assert!(seen_background);
    }

    #[test]
    fn test_scan_round_trip_reproduces_payload() {
        let payload = "Image Path: /home/user/photo.jpg";
        let raster = QrEncoder::new().encode(payload, BLACK, WHITE).unwrap();

        let gray = image::DynamicImage::ImageRgb8(raster).to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare(gray);
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);

        let (_meta, content) = grids[0].decode().unwrap();
        assert_eq!(content, payload);
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        // Version 40 at level M tops out well below 3000 bytes.
        let payload = "x".repeat(3000);
        assert!(QrEncoder::new().encode(&payload, BLACK, WHITE).is_err());
    }
}
