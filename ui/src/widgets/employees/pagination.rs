use egui::{RichText, Ui};
use roster_business::{PaginationCompute, workflow};
use roster_states::StateCtx;

use super::style;

/// Previous / `Page x of y` / Next.
pub fn pagination_controls(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let pagination = state_ctx.compute::<PaginationCompute>().clone();

    ui.horizontal(|ui| {
        let prev = ui.add_enabled(
            pagination.has_prev(),
            style::page_button("Previous", pagination.has_prev()),
        );
        if prev.clicked() {
            workflow::prev_page(state_ctx);
        }

        ui.label(RichText::new(pagination.label()).color(style::TEXT_COLOR));

        let next = ui.add_enabled(
            pagination.has_next(),
            style::page_button("Next", pagination.has_next()),
        );
        if next.clicked() {
            workflow::next_page(state_ctx);
        }
    });
}
