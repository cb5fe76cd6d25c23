//! Employee table, split the same way as the panel uses it:
//! - `columns`: column titles and sizing
//! - `header`: header row
//! - `row`: one record per row, reporting clicked actions
//! - `cells`: per-column cell rendering

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Grid, ScrollArea, Ui};
use roster_business::Employee;

use super::style;
pub use row::RowAction;

/// Renders `employees` as a grid and returns the action clicked this frame.
///
/// Actions are only reported, the caller applies them after the grid has
/// released its borrow of the records.
pub fn employee_table(ui: &mut Ui, employees: &[Employee]) -> Option<RowAction> {
    let mut action = None;

    style::table_frame().show(ui, |ui| {
        ScrollArea::horizontal().show(ui, |ui| {
            Grid::new("employee_table")
                .num_columns(columns::COLUMN_COUNT)
                .striped(true)
                .spacing([0.0, 0.0])
                .min_col_width(columns::MIN_COLUMN_WIDTH)
                .show(ui, |ui| {
                    header::render_table_header(ui);

                    if employees.is_empty() {
                        row::render_empty_row(ui);
                        return;
                    }

                    for employee in employees {
                        if let Some(clicked) = row::render_employee_row(ui, employee) {
                            action = Some(clicked);
                        }
                    }
                });
        });
    });

    action
}
