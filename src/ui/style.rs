//! Widget styling derived from the active palette
//!
//! Each function returns a style closure for one kind of styleable
//! region.

use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::theme::Palette;

/// Window background behind everything
pub fn window(palette: Palette) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(palette.background)),
        ..container::Style::default()
    }
}

/// Rounded panel behind the QR canvas and the image preview
pub fn panel(palette: Palette) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(palette.panel)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 10.0.into(),
        },
        ..container::Style::default()
    }
}

/// Flat accent-colored action button that lifts on hover
pub fn action_button(palette: Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette.background,
            _ => palette.panel,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette.accent,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// Text tinted with one palette color
pub fn tinted(color: Color) -> impl Fn(&Theme) -> text::Style {
    move |_theme| text::Style { color: Some(color) }
}
