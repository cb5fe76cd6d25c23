//! Colors and sizes of the employee list.
//!
//! Everything here is applied to the list's own widgets; the global egui
//! style is never touched.

use egui::{Button, Color32, CornerRadius, Frame, InnerResponse, Margin, RichText, Stroke, Ui};

pub const TITLE_COLOR: Color32 = Color32::from_rgb(0x2d, 0x37, 0x48);
pub const TEXT_COLOR: Color32 = Color32::from_rgb(0x4a, 0x55, 0x68);
pub const BORDER_COLOR: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0);
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(0xf8, 0xfa, 0xfc);

/// Row action buttons (Edit and Delete share it).
pub const ACTION_COLOR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const PAGE_BUTTON_COLOR: Color32 = Color32::from_rgb(0x4a, 0x90, 0xe2);
pub const DISABLED_COLOR: Color32 = Color32::from_rgb(0xcb, 0xd5, 0xe0);

pub const SEARCH_WIDTH: f32 = 300.0;
pub const IMAGE_SIZE: f32 = 50.0;
pub const MODAL_WIDTH: f32 = 400.0;

/// Header cell with the light background.
pub fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, add_contents)
}

pub fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, add_contents)
}

/// Outer frame of the table.
pub fn table_frame() -> Frame {
    Frame::NONE
        .fill(Color32::WHITE)
        .stroke(Stroke::new(1.0, BORDER_COLOR))
        .corner_radius(CornerRadius::same(8))
}

/// Filled button with white text; `text` stays the accessible label.
pub fn filled_button(text: &str, fill: Color32) -> Button<'static> {
    Button::new(RichText::new(text).color(Color32::WHITE))
        .fill(fill)
        .corner_radius(CornerRadius::same(4))
}

/// Previous/Next button, grayed out when it cannot move.
pub fn page_button(text: &str, enabled: bool) -> Button<'static> {
    let fill = if enabled {
        PAGE_BUTTON_COLOR
    } else {
        DISABLED_COLOR
    };
    filled_button(text, fill)
}
