/// Application state module
///
/// Holds the in-memory session owned by the UI thread: the selected
/// image path, the generated QR raster and the theme flag. Nothing here
/// persists across runs.
pub mod session;
