use egui::{RichText, TextEdit, Ui};
use roster_business::{EmployeeListQuery, workflow};
use roster_states::StateCtx;

use super::style;

pub const SEARCH_HINT: &str = "Search employees...";

/// Title on the left, search box on the right.
///
/// The box edits a per-frame copy of the query's search text; a change is
/// pushed back through `workflow::set_search`, which refetches on the next
/// frame sync.
pub fn employee_list_header(state_ctx: &mut StateCtx, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new("Employee List").color(style::TITLE_COLOR));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut search = state_ctx.state::<EmployeeListQuery>().search().to_owned();
            let response = ui.add(
                TextEdit::singleline(&mut search)
                    .hint_text(SEARCH_HINT)
                    .desired_width(style::SEARCH_WIDTH),
            );
            if response.changed() {
                workflow::set_search(state_ctx, &search);
            }
        });
    });
}
