/// UI building blocks
///
/// Native dialogs (dialogs.rs) and palette-driven widget styling
/// (style.rs). Layout itself lives with the application in main.rs.
pub mod dialogs;
pub mod style;
