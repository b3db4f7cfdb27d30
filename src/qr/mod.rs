/// QR symbol generation module
///
/// Turns a text payload into a colored RGB raster. Symbol version
/// selection, masking and error correction are owned by the `qrcode`
/// crate; this module only paints the module grid.
pub mod encoder;

pub use encoder::QrEncoder;
