//! Row rendering for the employee table.

use egui::{RichText, Ui};
use roster_business::Employee;

use super::cells::{ActionButton, render_action_buttons, render_image_cell, render_text_cell};
use crate::widgets::employees::style;

/// Action requested from a row, carrying the record it was clicked on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit(Employee),
    Delete(Employee),
}

/// Renders one record and ends the grid row.
pub fn render_employee_row(ui: &mut Ui, employee: &Employee) -> Option<RowAction> {
    style::data_cell(ui, |ui| render_image_cell(ui, &employee.image));
    for text in [
        employee.name.as_str(),
        employee.email.as_str(),
        employee.mobile.as_str(),
        employee.designation.as_str(),
        employee.gender.as_str(),
    ] {
        style::data_cell(ui, |ui| render_text_cell(ui, text));
    }
    style::data_cell(ui, |ui| render_text_cell(ui, &employee.course_label()));

    let clicked = style::data_cell(ui, render_action_buttons).inner;
    ui.end_row();

    clicked.map(|button| match button {
        ActionButton::Edit => RowAction::Edit(employee.clone()),
        ActionButton::Delete => RowAction::Delete(employee.clone()),
    })
}

/// Placeholder row shown when the page has no records.
pub fn render_empty_row(ui: &mut Ui) {
    style::data_cell(ui, |ui| {
        ui.label(RichText::new("No employees found.").color(style::TEXT_COLOR));
    });
    ui.end_row();
}
