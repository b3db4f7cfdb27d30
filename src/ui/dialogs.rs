//! Native file and message dialogs
//!
//! Thin wrappers over `rfd` so the update handlers read as intent. Every
//! dialog blocks the UI thread until dismissed.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

/// Ask the user to pick an image file
///
/// The extension filter is a dialog hint only; nothing stops the user
/// from picking an arbitrary file via the all-files fallback.
pub fn pick_image() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Select image")
        .add_filter("Image files", &["png", "jpg", "jpeg"])
        .add_filter("All files", &["*"])
        .pick_file()
}

/// Ask where to write the generated PNG
pub fn pick_save_path(default_name: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Save QR code")
        .set_file_name(default_name)
        .add_filter("PNG files", &["png"])
        .save_file()
}

/// Blocking error notification
pub fn error(title: &str, message: &str) {
    show(MessageLevel::Error, title, message);
}

/// Blocking warning for a missing precondition
pub fn warn(title: &str, message: &str) {
    show(MessageLevel::Warning, title, message);
}

/// Blocking confirmation notice
pub fn info(title: &str, message: &str) {
    show(MessageLevel::Info, title, message);
}

fn show(level: MessageLevel, title: &str, message: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
