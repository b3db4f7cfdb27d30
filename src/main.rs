use iced::widget::image::{FilterMethod, Handle};
use iced::widget::image as iced_image;
use iced::widget::{button, column, container, row, text, Space};
use iced::{window, Alignment, ContentFit, Element, Length, Size, Task, Theme};
use image::RgbImage;
use tracing_subscriber::EnvFilter;

// Application modules
mod error;
mod imaging;
mod qr;
mod state;
mod theme;
mod ui;

use qr::QrEncoder;
use state::session::Session;
use theme::Palette;
use ui::dialogs;

/// Fixed, non-resizable window size in logical pixels
const WINDOW_SIZE: Size = Size::new(900.0, 700.0);

/// Side of the square QR display region
const QR_CANVAS_SIZE: f32 = 420.0;

/// Side of the square original-image preview region
const PREVIEW_BOX_SIZE: f32 = 220.0;

/// Main application state
struct QrStudio {
    /// Session data driving every action
    session: Session,
    /// Status line under the button row
    status: String,
    /// Live handle for the preview bitmap, replaced on reselection
    preview_handle: Option<Handle>,
    /// Live handle for the QR bitmap, replaced on regeneration
    qr_handle: Option<Handle>,
    /// QR symbol encoder with the fixed symbol parameters
    encoder: QrEncoder,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Select Image"
    SelectImage,
    /// User clicked "Generate QR"
    GenerateQr,
    /// User clicked "Save QR"
    SaveQr,
    /// User clicked the theme toggle
    ToggleTheme,
}

impl QrStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        (
            QrStudio {
                session: Session::new(),
                status: String::from("Select an image (PNG / JPG / JPEG)."),
                preview_handle: None,
                qr_handle: None,
                encoder: QrEncoder::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    ///
    /// Everything runs synchronously on the UI thread; dialogs block until
    /// dismissed and decode/encode work is fast enough to run inline.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectImage => self.select_image(),
            Message::GenerateQr => self.generate_qr(),
            Message::SaveQr => self.save_qr(),
            Message::ToggleTheme => {
                self.session.toggle_theme();
                tracing::debug!(theme = ?self.session.theme, "theme toggled");
            }
        }

        Task::none()
    }

    /// Pick an image file and refresh the preview panel
    fn select_image(&mut self) {
        let Some(path) = dialogs::pick_image() else {
            self.status = String::from("No image selected.");
            return;
        };

        match imaging::load_preview(&path) {
            Ok(thumbnail) => {
                let (width, height) = thumbnail.dimensions();
                self.preview_handle = Some(Handle::from_rgba(width, height, thumbnail.into_raw()));

                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                tracing::info!(path = %path.display(), "image selected");
                self.status = format!("Selected: {name}");
                self.session.select_image(path);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "image decode failed");
                dialogs::error("Image Error", &format!("Could not open image:\n{e}"));
                self.session.clear_selection();
            }
        }
    }

    /// Encode the selected path into a fresh QR raster
    fn generate_qr(&mut self) {
        let Some(payload) = self.session.qr_payload() else {
            dialogs::warn("No image", "Please select an image first.");
            return;
        };

        let (fill, background) = self.session.theme.qr_colors();
        match self.encoder.encode(&payload, fill, background) {
            Ok(raster) => {
                self.qr_handle = Some(display_handle(&raster));
                tracing::info!(side = raster.width(), "QR raster generated");
                self.session.set_qr_raster(raster);
                self.status = String::from("QR generated. Click 'Save QR' to export.");
            }
            Err(e) => {
                tracing::warn!(error = %e, "QR generation failed");
                dialogs::error("QR Error", &format!("Failed to generate QR:\n{e}"));
            }
        }
    }

    /// Write the current QR raster to a user-chosen PNG file
    fn save_qr(&mut self) {
        let Some(raster) = self.session.qr_raster() else {
            dialogs::warn("No QR", "Generate a QR first.");
            return;
        };

        let Some(path) = dialogs::pick_save_path(&self.session.default_save_name()) else {
            return;
        };

        match imaging::save_png(raster, &path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "QR saved");
                self.status = format!("Saved: {}", path.display());
                dialogs::info("Saved", &format!("QR saved to:\n{}", path.display()));
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "save failed");
                dialogs::error("Save Error", &format!("Failed to save QR:\n{e}"));
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let palette = self.session.theme.palette();

        let title = text("Image → QR Code Generator")
            .size(26)
            .style(ui::style::tinted(palette.title));

        let buttons = row![
            action_button("Select Image", Message::SelectImage, palette),
            action_button("Generate QR", Message::GenerateQr, palette),
            action_button("Save QR", Message::SaveQr, palette),
            action_button(self.session.theme.toggle_label(), Message::ToggleTheme, palette),
        ]
        .spacing(16);

        let status = text(&self.status)
            .size(14)
            .style(ui::style::tinted(palette.text));

        let qr_view: Element<'_, Message> = match &self.qr_handle {
            Some(handle) => iced_image(handle.clone())
                .content_fit(ContentFit::ScaleDown)
                .filter_method(FilterMethod::Nearest)
                .into(),
            None => text("No QR generated yet")
                .size(13)
                .style(ui::style::tinted(palette.text))
                .into(),
        };

        let preview_view: Element<'_, Message> = match &self.preview_handle {
            Some(handle) => iced_image(handle.clone())
                .content_fit(ContentFit::ScaleDown)
                .into(),
            None => text("No image selected")
                .size(13)
                .style(ui::style::tinted(palette.text))
                .into(),
        };

        let panels = row![
            framed_panel("Generated QR", qr_view, QR_CANVAS_SIZE, palette),
            framed_panel("Original Image Preview", preview_view, PREVIEW_BOX_SIZE, palette),
        ]
        .spacing(28)
        .align_y(Alignment::Start);

        let footer = text(format!("QR Studio v{}", env!("CARGO_PKG_VERSION")))
            .size(12)
            .style(ui::style::tinted(palette.text));

        let content = column![
            title,
            buttons,
            status,
            panels,
            Space::with_height(Length::Fill),
            footer
        ]
        .spacing(14)
        .padding(18)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(ui::style::window(palette))
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.session.theme.theme()
    }
}

/// One labeled action button
fn action_button(label: &str, message: Message, palette: Palette) -> Element<'_, Message> {
    button(text(label).size(14))
        .on_press(message)
        .padding(10)
        .style(ui::style::action_button(palette))
        .into()
}

/// Captioned panel with a fixed square display region
fn framed_panel<'a>(
    caption: &'a str,
    content: Element<'a, Message>,
    side: f32,
    palette: Palette,
) -> Element<'a, Message> {
    column![
        text(caption).size(13).style(ui::style::tinted(palette.text)),
        container(content)
            .center_x(Length::Fixed(side))
            .center_y(Length::Fixed(side))
            .style(ui::style::panel(palette)),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}

/// Convert an RGB raster into a bitmap handle for the image widget
fn display_handle(raster: &RgbImage) -> Handle {
    let mut pixels = Vec::with_capacity(raster.as_raw().len() / 3 * 4);
    for pixel in raster.pixels() {
        pixels.extend_from_slice(&[pixel[0], pixel[1], pixel[2], 0xff]);
    }

    Handle::from_rgba(raster.width(), raster.height(), pixels)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    iced::application("QR Studio", QrStudio::update, QrStudio::view)
        .theme(QrStudio::theme)
        .window(window::Settings {
            size: WINDOW_SIZE,
            resizable: false,
            ..window::Settings::default()
        })
        .centered()
        .run_with(QrStudio::new)
}
