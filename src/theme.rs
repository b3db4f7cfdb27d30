//! Two-state visual theme
//!
//! A pure mapping from the theme flag to a fixed palette record. Applying
//! a theme is re-running the same deterministic lookup over every styled
//! region; nothing else in the session depends on it.

use iced::{Color, Theme};
use image::Rgb;

/// Visual mode of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Cyan-on-dark-blue, the startup mode
    #[default]
    Dark,
    /// Dark-ink-on-pale-blue
    Light,
}

/// Fixed set of colors applied to every styled region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Window background
    pub background: Color,
    /// Panel, canvas and preview background
    pub panel: Color,
    /// Title heading color
    pub title: Color,
    /// Status line and footer text color
    pub text: Color,
    /// Button label and border color
    pub accent: Color,
}

impl Mode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Mode::Dark => Mode::Light,
            Mode::Light => Mode::Dark,
        }
    }

    /// Label for the toggle button, naming the mode it switches *to*
    pub fn toggle_label(self) -> &'static str {
        match self {
            Mode::Dark => "Light Mode",
            Mode::Light => "Dark Mode",
        }
    }

    /// Palette record for this mode
    pub fn palette(self) -> Palette {
        match self {
            Mode::Dark => Palette {
                background: Color::from_rgb8(0x07, 0x10, 0x21),
                panel: Color::from_rgb8(0x0f, 0x17, 0x24),
                title: Color::from_rgb8(0x00, 0xf0, 0xff),
                text: Color::from_rgb8(0xcc, 0xcc, 0xcc),
                accent: Color::from_rgb8(0x00, 0xf0, 0xff),
            },
            Mode::Light => Palette {
                background: Color::from_rgb8(0xee, 0xf6, 0xff),
                panel: Color::from_rgb8(0xf0, 0xf6, 0xfb),
                title: Color::from_rgb8(0x0b, 0x27, 0x40),
                text: Color::from_rgb8(0x0a, 0x17, 0x24),
                accent: Color::from_rgb8(0x00, 0x30, 0x50),
            },
        }
    }

    /// Module and background colors for newly generated QR rasters
    ///
    /// Already-generated rasters keep the pair they were encoded with.
    pub fn qr_colors(self) -> (Rgb<u8>, Rgb<u8>) {
        match self {
            Mode::Dark => (Rgb([0, 255, 255]), Rgb([0, 0, 0])),
            Mode::Light => (Rgb([0, 0, 0]), Rgb([255, 255, 255])),
        }
    }

    /// iced theme backing the window chrome
    pub fn theme(self) -> Theme {
        let palette = self.palette();
        let name = match self {
            Mode::Dark => "QR Studio Dark",
            Mode::Light => "QR Studio Light",
        };

        Theme::custom(
            name.to_string(),
            iced::theme::Palette {
                background: palette.background,
                text: palette.text,
                primary: palette.accent,
                success: Color::from_rgb8(0x2e, 0xcc, 0x71),
                danger: Color::from_rgb8(0xe7, 0x4c, 0x3c),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_dark() {
        assert_eq!(Mode::default(), Mode::Dark);
    }

    #[test]
    fn test_toggle_flips_between_modes() {
        assert_eq!(Mode::Dark.toggled(), Mode::Light);
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
        assert_eq!(Mode::Dark.toggled().toggled(), Mode::Dark);
    }

    #[test]
    fn test_toggle_label_names_target_mode() {
        assert_eq!(Mode::Dark.toggle_label(), "Light Mode");
        assert_eq!(Mode::Light.toggle_label(), "Dark Mode");
    }

    #[test]
    fn test_qr_color_pairs_per_mode() {
        assert_eq!(Mode::Dark.qr_colors(), (Rgb([0, 255, 255]), Rgb([0, 0, 0])));
        assert_eq!(Mode::Light.qr_colors(), (Rgb([0, 0, 0]), Rgb([255, 255, 255])));
    }

    #[test]
    fn test_qr_colors_always_contrast() {
        for mode in [Mode::Dark, Mode::Light] {
            let (fill, background) = mode.qr_colors();
            assert_ne!(fill, background);
        }
    }

    #[test]
    fn test_palettes_differ_between_modes() {
        let dark = Mode::Dark.palette();
        let light = Mode::Light.palette();
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text, light.text);
    }
}
