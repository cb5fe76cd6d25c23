//! Header row of the employee table.

use egui::{RichText, Ui};

use super::columns::HEADERS;
use crate::widgets::employees::style;

/// Renders one bold header cell per column and ends the grid row.
pub fn render_table_header(ui: &mut Ui) {
    for label in HEADERS {
        style::header_cell(ui, |ui| {
            ui.label(RichText::new(label).strong().color(style::TEXT_COLOR));
        });
    }
    ui.end_row();
}
