use std::time::Duration;

use roster_business::workflow;

use crate::{state::State, widgets};

/// Repaint interval while network tasks are outstanding.
const PENDING_REPAINT: Duration = Duration::from_millis(50);

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();
        workflow::sync_employee_list(&mut self.state.ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Roster");
                ui.separator();
                // Stands in for the parent of the list: bumps its refresh signal.
                if ui.button("Refresh").clicked() {
                    workflow::refresh(&mut self.state.ctx);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::NONE
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    widgets::employee_list_panel(&mut self.state.ctx, ui);
                });
        });

        // Run background jobs
        self.state.ctx.run_computed();

        // Results arrive off-frame; keep polling until every task is reaped.
        if self.state.ctx.task_count() > 0 {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
