/// Image decode and export module
///
/// This module handles:
/// - Decoding user-selected images (PNG/JPEG and the other formats the
///   `image` crate ships)
/// - Generating the bounded preview thumbnail
/// - Writing generated QR rasters to disk as PNG
pub mod save;
pub mod thumbnail;

pub use save::save_png;
pub use thumbnail::load_preview;
