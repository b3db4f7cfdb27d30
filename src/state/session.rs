//! In-memory session state connecting the UI actions.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::theme::Mode;

/// Prefix of the text payload encoded into every QR symbol
pub const PAYLOAD_PREFIX: &str = "Image Path: ";

/// Save filename offered when no image was ever selected
const FALLBACK_SAVE_NAME: &str = "qr.png";

/// Everything the running session owns
///
/// One instance lives on the UI thread for the lifetime of the window.
/// Generation requires a selected path, saving requires a generated
/// raster, and each generation replaces the previous raster wholesale.
#[derive(Debug, Default)]
pub struct Session {
    /// Absolute path of the selected image, exactly as the file dialog
    /// returned it (no normalization)
    image_path: Option<PathBuf>,
    /// Most recently generated QR raster
    qr_raster: Option<RgbImage>,
    /// Current visual theme; starts dark
    pub theme: Mode,
}

impl Session {
    /// Create a fresh session: no selection, no raster, dark theme
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly selected image path, superseding any previous one
    pub fn select_image(&mut self, path: PathBuf) {
        self.image_path = Some(path);
    }

    /// Forget the selected image after a decode failure
    pub fn clear_selection(&mut self) {
        self.image_path = None;
    }

    /// The selected image path, if any
    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    /// Text payload for the next QR generation
    ///
    /// Returns `None` without a selection; generation must not proceed in
    /// that case.
    pub fn qr_payload(&self) -> Option<String> {
        self.image_path
            .as_ref()
            .map(|path| format!("{PAYLOAD_PREFIX}{}", path.display()))
    }

    /// Store a freshly generated raster, dropping the previous one
    pub fn set_qr_raster(&mut self, raster: RgbImage) {
        self.qr_raster = Some(raster);
    }

    /// The current QR raster, if one was generated
    pub fn qr_raster(&self) -> Option<&RgbImage> {
        self.qr_raster.as_ref()
    }

    /// Suggested filename for the save dialog
    ///
    /// `photo.jpg` becomes `photo_QR.png`; without a selection the name
    /// falls back to `qr.png`.
    pub fn default_save_name(&self) -> String {
        match self.image_path.as_ref().and_then(|path| path.file_stem()) {
            Some(stem) => format!("{}_QR.png", stem.to_string_lossy()),
            None => FALLBACK_SAVE_NAME.to_string(),
        }
    }

    /// Flip the visual theme
    ///
    /// Affects only widgets and subsequently generated rasters; the
    /// current raster keeps its colors.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
