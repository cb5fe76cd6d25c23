//! Edit and delete-confirmation dialogs of the employee list.

use egui::{Grid, Id, Modal, RichText, TextEdit, Ui};
use roster_business::{Employee, EmployeeListState, workflow};
use roster_states::StateCtx;

use super::style;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

/// Course list edit collected while rendering, applied to the draft after.
enum CourseEdit {
    Add,
    Remove(usize),
}

/// Shows the edit dialog while a draft exists. The dialog is modal: the
/// table behind it takes no input until it closes.
///
/// Fields render a copy of the draft; any change is written back through
/// `workflow::edit_draft`, which ignores it unless the modal is still
/// `Editing`.
pub fn show_edit_employee_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let edit = state_ctx.state::<EmployeeListState>().edit();
    let Some(draft) = edit.draft() else {
        return;
    };
    let submitting = edit.is_submitting();
    let mut employee = draft.employee().clone();

    let mut changed = false;
    let mut course_edit = None;
    let mut submit = false;
    let mut cancel = false;

    // Escape or a click on the backdrop counts as Cancel.
    let dismissed = Modal::new(Id::new("edit_employee_modal"))
        .show(ui.ctx(), |ui| {
            ui.set_width(style::MODAL_WIDTH);
            ui.heading("Edit Employee");
            ui.add_space(8.0);

            ui.add_enabled_ui(!submitting, |ui| {
                changed = employee_fields(ui, &mut employee);
                course_edit = course_fields(ui, &mut employee.course, &mut changed);
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                submit = ui
                    .add_enabled(!submitting, egui::Button::new("Submit"))
                    .clicked();
                cancel = ui.button("Cancel").clicked();
                if submitting {
                    ui.spinner();
                }
            });
        })
        .should_close();

    if changed {
        workflow::edit_draft(state_ctx, |draft| *draft.employee_mut() = employee);
    }
    match course_edit {
        Some(CourseEdit::Add) => workflow::edit_draft(state_ctx, |draft| draft.add_course()),
        Some(CourseEdit::Remove(index)) => {
            workflow::edit_draft(state_ctx, |draft| draft.remove_course(index));
        }
        None => {}
    }

    if cancel || dismissed {
        workflow::cancel_edit(state_ctx);
    } else if submit {
        workflow::submit_edit(state_ctx);
    }
}

/// Single-line fields; returns whether any of them changed.
fn employee_fields(ui: &mut Ui, employee: &mut Employee) -> bool {
    let mut changed = false;

    Grid::new("edit_employee_fields")
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for (label, value) in [
                ("Name", &mut employee.name),
                ("Email", &mut employee.email),
                ("Mobile", &mut employee.mobile),
                ("Designation", &mut employee.designation),
                ("Gender", &mut employee.gender),
            ] {
                let label = ui.label(label);
                changed |= ui
                    .add(TextEdit::singleline(value).desired_width(f32::INFINITY))
                    .labelled_by(label.id)
                    .changed();
                ui.end_row();
            }
        });

    changed
}

/// One field per course with a remove button, and an add button below.
fn course_fields(ui: &mut Ui, courses: &mut [String], changed: &mut bool) -> Option<CourseEdit> {
    let mut edit = None;

    ui.add_space(8.0);
    ui.label("Course");
    for (index, course) in courses.iter_mut().enumerate() {
        ui.horizontal(|ui| {
            *changed |= ui.text_edit_singleline(course).changed();
            if ui.small_button("Remove").clicked() {
                edit = Some(CourseEdit::Remove(index));
            }
        });
    }
    if ui.small_button("Add course").clicked() {
        edit = Some(CourseEdit::Add);
    }

    edit
}

/// Yes/No prompt for the record awaiting deletion.
pub fn show_delete_confirm_modal(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(employee) = state_ctx.state::<EmployeeListState>().pending_delete() else {
        return;
    };
    let name = employee.name.clone();

    let mut confirm = false;
    let mut decline = false;

    let dismissed = Modal::new(Id::new("delete_employee_modal"))
        .show(ui.ctx(), |ui| {
            ui.heading("Delete Employee");
            ui.add_space(8.0);
            ui.label(DELETE_PROMPT);
            ui.label(RichText::new(name).strong());
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                confirm = ui
                    .add(style::filled_button("Yes", style::ACTION_COLOR))
                    .clicked();
                decline = ui.button("No").clicked();
            });
        })
        .should_close();

    if decline || dismissed {
        workflow::decline_delete(state_ctx);
    } else if confirm {
        workflow::confirm_delete(state_ctx);
    }
}
