//! Employee list panel: header, table, pagination and the dialogs.

use egui::{RichText, Ui};
use roster_business::{EmployeeListCompute, workflow};
use roster_states::StateCtx;

use super::modals::{show_delete_confirm_modal, show_edit_employee_modal};
use super::pagination::pagination_controls;
use super::search::employee_list_header;
use super::style;
use super::table::{RowAction, employee_table};

/// Renders the employee list from the cached page.
///
/// Reads `EmployeeListCompute` and `PaginationCompute`, writes only through
/// `workflow`. Fetching is driven by `workflow::sync_employee_list`, which
/// the hosting app calls once per frame.
pub fn employee_list_panel(state_ctx: &mut StateCtx, ui: &mut Ui) {
    employee_list_header(state_ctx, ui);
    ui.add_space(20.0);

    let list = state_ctx.compute::<EmployeeListCompute>();
    if list.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new("Loading...").color(style::TEXT_COLOR));
        });
    }

    // Apply after the table so the records are no longer borrowed.
    let action = employee_table(ui, list.employees());
    match action {
        Some(RowAction::Edit(employee)) => workflow::open_edit(state_ctx, employee),
        Some(RowAction::Delete(employee)) => workflow::request_delete(state_ctx, employee),
        None => {}
    }

    ui.add_space(16.0);
    pagination_controls(state_ctx, ui);

    show_edit_employee_modal(state_ctx, ui);
    show_delete_confirm_modal(state_ctx, ui);
}

#[cfg(test)]
mod employee_list_panel_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use roster_business::{
        BusinessConfig, EditModal, Employee, EmployeeDraft, EmployeeListQuery,
        EmployeeListState, FetchStatus, UpdateEmployeeCommand, register_employee_list,
    };

    use super::*;
    use crate::widgets::employees::DELETE_PROMPT;

    fn employee(id: &str, name: &str, course: &[&str]) -> Employee {
        Employee {
            id: id.into(),
            name: name.to_owned(),
            email: format!("{id}@example.com"),
            mobile: "5550100".to_owned(),
            designation: "Engineer".to_owned(),
            gender: "F".to_owned(),
            course: course.iter().map(|c| (*c).to_owned()).collect(),
            image: String::new(),
        }
    }

    /// Context with one loaded page of three records out of `total_pages`.
    fn create_test_state_ctx(total_pages: u32) -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::new("http://test"));
        register_employee_list(&mut ctx);

        ctx.updater().set(EmployeeListCompute {
            status: FetchStatus::Loaded,
            employees: vec![
                employee("e1", "Alice", &["MCA", "BCA"]),
                employee("e2", "Bob", &["BSC"]),
                employee("e3", "Carol", &[]),
            ],
            total_pages,
            loaded_key: None,
        });
        ctx.sync_computes();
        ctx
    }

    fn harness(state_ctx: &mut StateCtx) -> Harness<'_, &mut StateCtx> {
        Harness::builder()
            .with_size(egui::vec2(1280.0, 800.0))
            .build_ui_state(
                |ui, state_ctx| {
                    employee_list_panel(state_ctx, ui);
                },
                state_ctx,
            )
    }

    /// Steps a few frames so modals opened by a click get laid out.
    fn settle_frames(harness: &mut Harness<'_, &mut StateCtx>) {
        for _ in 0..3 {
            harness.step();
        }
    }

    #[test]
    fn test_header_and_columns_exist() {
        let mut state_ctx = create_test_state_ctx(1);
        let mut harness = harness(&mut state_ctx);
        harness.step();

        assert!(
            harness.query_by_label("Employee List").is_some(),
            "title should exist"
        );
        for column in [
            "Image",
            "Name",
            "Email",
            "Mobile",
            "Designation",
            "Gender",
            "Course",
            "Actions",
        ] {
            assert!(
                harness.query_by_label(column).is_some(),
                "{column} header should exist"
            );
        }
    }

    #[test]
    fn test_rows_render_records_and_joined_courses() {
        let mut state_ctx = create_test_state_ctx(1);
        let mut harness = harness(&mut state_ctx);
        harness.step();

        assert!(harness.query_by_label("Alice").is_some(), "Alice row");
        assert!(harness.query_by_label("Bob").is_some(), "Bob row");
        assert!(
            harness.query_by_label("MCA, BCA").is_some(),
            "courses should be joined with a comma"
        );
        assert_eq!(
            harness.query_all_by_label("Edit").count(),
            3,
            "one Edit button per record"
        );
        assert_eq!(
            harness.query_all_by_label("Delete").count(),
            3,
            "one Delete button per record"
        );
        assert!(
            harness.query_by_label("No employees found.").is_none(),
            "placeholder should not show with records"
        );
    }

    #[test]
    fn test_empty_page_shows_placeholder() {
        let mut state_ctx = StateCtx::new();
        state_ctx.add_state(BusinessConfig::new("http://test"));
        register_employee_list(&mut state_ctx);

        let mut harness = harness(&mut state_ctx);
        harness.step();

        assert!(
            harness.query_by_label("No employees found.").is_some(),
            "empty page should show the placeholder row"
        );
        assert!(
            harness.query_by_label("Page 1 of 1").is_some(),
            "empty result still has one page"
        );
    }

    #[test]
    fn test_next_moves_to_the_following_page() {
        let mut state_ctx = create_test_state_ctx(2);
        let mut harness = harness(&mut state_ctx);
        harness.step();

        assert!(harness.query_by_label("Page 1 of 2").is_some(), "label");

        harness.get_by_label("Next").click();
        harness.step();

        assert_eq!(
            harness.state().state::<EmployeeListQuery>().page(),
            2,
            "Next should move to page 2"
        );
    }

    #[test]
    fn test_previous_is_inert_on_the_first_page() {
        let mut state_ctx = create_test_state_ctx(2);
        let mut harness = harness(&mut state_ctx);
        harness.step();

        harness.get_by_label("Previous").click();
        harness.step();

        assert_eq!(
            harness.state().state::<EmployeeListQuery>().page(),
            1,
            "Previous must not go below page 1"
        );
    }

    #[test]
    fn test_next_is_inert_on_the_last_page() {
        let mut state_ctx = create_test_state_ctx(1);
        let mut harness = harness(&mut state_ctx);
        harness.step();

        harness.get_by_label("Next").click();
        harness.step();

        assert_eq!(
            harness.state().state::<EmployeeListQuery>().page(),
            1,
            "Next must not go past the last page"
        );
    }

    #[test]
    fn test_edit_opens_modal_prefilled_and_cancel_closes_it() {
        let mut state_ctx = create_test_state_ctx(1);
        let mut harness = harness(&mut state_ctx);
        harness.step();

        harness
            .query_all_by_label("Edit")
            .next()
            .expect("first Edit button")
            .click();
        settle_frames(&mut harness);

        let draft = harness
            .state()
            .state::<EmployeeListState>()
            .edit()
            .draft()
            .map(|draft| draft.employee().name.clone());
        assert_eq!(draft.as_deref(), Some("Alice"), "draft of the clicked row");
        assert!(
            harness.query_by_label("Edit Employee").is_some(),
            "edit modal should be visible"
        );

        harness.get_by_label("Cancel").click();
        settle_frames(&mut harness);

        assert_eq!(
            *harness.state().state::<EmployeeListState>().edit(),
            EditModal::Closed,
            "Cancel should close the modal"
        );
        assert_eq!(
            harness.state().latest_generation::<UpdateEmployeeCommand>(),
            0,
            "Cancel must not send an update"
        );
    }

    #[test]
    fn test_add_course_extends_the_draft() {
        let mut state_ctx = create_test_state_ctx(1);
        let alice = employee("e1", "Alice", &["MCA", "BCA"]);
        state_ctx.update::<EmployeeListState>(|state| {
            state.edit = EditModal::Editing(EmployeeDraft::new(alice));
        });
        let mut harness = harness(&mut state_ctx);
        settle_frames(&mut harness);

        harness.get_by_label("Add course").click();
        settle_frames(&mut harness);

        let courses = harness
            .state()
            .state::<EmployeeListState>()
            .edit()
            .draft()
            .map(|draft| draft.employee().course.clone());
        assert_eq!(
            courses,
            Some(vec!["MCA".to_owned(), "BCA".to_owned(), String::new()]),
            "Add course should append an empty course"
        );
    }

    #[test]
    fn test_submit_is_disabled_while_submitting() {
        let mut state_ctx = create_test_state_ctx(1);
        let alice = employee("e1", "Alice", &["MCA"]);
        state_ctx.update::<EmployeeListState>(|state| {
            state.edit = EditModal::Submitting(EmployeeDraft::new(alice));
        });
        let mut harness = harness(&mut state_ctx);
        settle_frames(&mut harness);

        harness.get_by_label("Submit").click();
        settle_frames(&mut harness);

        assert!(
            harness.state().state::<EmployeeListState>().edit().is_submitting(),
            "modal should still be submitting"
        );
        assert_eq!(
            harness.state().latest_generation::<UpdateEmployeeCommand>(),
            0,
            "a disabled Submit must not send another update"
        );
    }

    #[test]
    fn test_delete_asks_and_no_declines() {
        let mut state_ctx = create_test_state_ctx(1);
        let mut harness = harness(&mut state_ctx);
        harness.step();

        harness
            .query_all_by_label("Delete")
            .nth(1)
            .expect("second Delete button")
            .click();
        settle_frames(&mut harness);

        let pending = harness
            .state()
            .state::<EmployeeListState>()
            .pending_delete()
            .map(|employee| employee.name.clone());
        assert_eq!(pending.as_deref(), Some("Bob"), "second row awaits confirmation");
        assert!(
            harness.query_by_label(DELETE_PROMPT).is_some(),
            "confirmation prompt should be visible"
        );

        harness.get_by_label("No").click();
        settle_frames(&mut harness);

        assert!(
            harness.state().state::<EmployeeListState>().pending_delete().is_none(),
            "No should clear the pending delete"
        );
        assert!(
            harness.query_by_label(DELETE_PROMPT).is_none(),
            "prompt should be gone"
        );
    }
}
