//! Cell rendering for the employee table.

use egui::{Image, RichText, Ui, vec2};

use crate::widgets::employees::style;

/// Round profile image loaded from its URL, or a blank placeholder.
pub fn render_image_cell(ui: &mut Ui, url: &str) {
    let size = vec2(style::IMAGE_SIZE, style::IMAGE_SIZE);
    if url.is_empty() {
        ui.allocate_space(size);
        return;
    }

    ui.add(
        Image::from_uri(url.to_owned())
            .fit_to_exact_size(size)
            .corner_radius(style::IMAGE_SIZE / 2.0),
    );
}

pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(style::TEXT_COLOR));
}

/// Which row button was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    Edit,
    Delete,
}

pub fn render_action_buttons(ui: &mut Ui) -> Option<ActionButton> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        if ui
            .add(style::filled_button("Edit", style::ACTION_COLOR))
            .clicked()
        {
            clicked = Some(ActionButton::Edit);
        }
        if ui
            .add(style::filled_button("Delete", style::ACTION_COLOR))
            .clicked()
        {
            clicked = Some(ActionButton::Delete);
        }
    });

    clicked
}
