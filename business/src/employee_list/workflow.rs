//! Synchronous transitions of the employee list, called by the UI.
//!
//! Widgets never touch `EmployeeListState` or the inputs directly; they call
//! these functions, which update states and dispatch commands. Call
//! [`sync_employee_list`] once per frame after `StateCtx::sync_computes`.

use roster_states::StateCtx;

use super::action_compute::{
    DeleteEmployeeCommand, EmployeeActionInput, EmployeeActionState, EmployeeDeleteCompute,
    EmployeeUpdateCompute, UpdateEmployeeCommand,
};
use super::list_compute::{EmployeeListCompute, FetchEmployeesCommand, FetchStatus};
use super::pagination::PaginationCompute;
use super::query::EmployeeListQuery;
use super::state::{EditModal, EmployeeDraft, EmployeeListState};
use crate::employee::Employee;

/// Reconciles list state with finished work:
///
/// 1. a finished update closes the edit modal (or reopens it for editing on
///    failure), and any successful update or delete bumps the refresh token;
/// 2. a load reporting fewer pages than the current page clamps the page;
/// 3. a query that differs from the last requested one dispatches a fetch.
pub fn sync_employee_list(ctx: &mut StateCtx) {
    settle_action(ctx);
    clamp_page_to_loaded(ctx);

    let key = ctx.state::<EmployeeListQuery>().key();
    if ctx.state::<EmployeeListState>().last_requested.as_ref() == Some(&key) {
        return;
    }

    log::debug!(
        "fetching employees page={} search={:?}",
        key.page,
        key.search
    );
    ctx.update::<EmployeeListState>(|state| state.last_requested = Some(key));
    ctx.dispatch::<FetchEmployeesCommand>();
}

fn settle_action(ctx: &mut StateCtx) {
    settle_update(ctx);
    settle_delete(ctx);
}

fn settle_update(ctx: &mut StateCtx) {
    match ctx.compute::<EmployeeUpdateCompute>().state().clone() {
        EmployeeActionState::Idle | EmployeeActionState::InFlight { .. } => return,
        EmployeeActionState::Success { .. } => {
            ctx.update::<EmployeeListState>(|state| {
                if state.edit.is_submitting() {
                    state.edit = EditModal::Closed;
                }
            });
            ctx.update::<EmployeeListQuery>(EmployeeListQuery::refresh);
        }
        EmployeeActionState::Error { .. } => {
            ctx.update::<EmployeeListState>(|state| {
                if let EditModal::Submitting(draft) = &state.edit {
                    let draft = draft.clone();
                    state.edit = EditModal::Editing(draft);
                }
            });
        }
    }

    // Acknowledge so the same outcome is not handled twice.
    ctx.set_compute(EmployeeUpdateCompute::default());
}

fn settle_delete(ctx: &mut StateCtx) {
    match ctx.compute::<EmployeeDeleteCompute>().state() {
        EmployeeActionState::Idle | EmployeeActionState::InFlight { .. } => return,
        EmployeeActionState::Success { .. } => {
            ctx.update::<EmployeeListQuery>(EmployeeListQuery::refresh);
        }
        EmployeeActionState::Error { .. } => {}
    }

    ctx.set_compute(EmployeeDeleteCompute::default());
}

fn clamp_page_to_loaded(ctx: &mut StateCtx) {
    let list = ctx.compute::<EmployeeListCompute>();
    if list.status != FetchStatus::Loaded
        || list.loaded_key != ctx.state::<EmployeeListState>().last_requested
    {
        return;
    }

    let total_pages = list.total_pages;
    if ctx.state::<EmployeeListQuery>().page() > total_pages {
        log::debug!("page out of range after load, clamping to {total_pages}");
        ctx.update::<EmployeeListQuery>(|query| {
            query.clamp_to(total_pages);
        });
    }
}

pub fn set_search(ctx: &mut StateCtx, search: &str) {
    if ctx.state::<EmployeeListQuery>().search() != search {
        ctx.update::<EmployeeListQuery>(|query| query.set_search(search));
    }
}

pub fn next_page(ctx: &mut StateCtx) {
    let pagination = ctx.compute::<PaginationCompute>();
    if !pagination.has_next() {
        return;
    }
    let total_pages = pagination.total_pages;
    ctx.update::<EmployeeListQuery>(|query| query.next_page(total_pages));
}

pub fn prev_page(ctx: &mut StateCtx) {
    if ctx.compute::<PaginationCompute>().has_prev() {
        ctx.update::<EmployeeListQuery>(EmployeeListQuery::prev_page);
    }
}

/// Parent-facing refresh signal.
pub fn refresh(ctx: &mut StateCtx) {
    ctx.update::<EmployeeListQuery>(EmployeeListQuery::refresh);
}

pub fn open_edit(ctx: &mut StateCtx, employee: Employee) {
    ctx.update::<EmployeeListState>(|state| {
        state.edit = EditModal::Editing(EmployeeDraft::new(employee));
    });
}

/// Applies `f` to the draft while the modal is `Editing`.
pub fn edit_draft(ctx: &mut StateCtx, f: impl FnOnce(&mut EmployeeDraft)) {
    ctx.update::<EmployeeListState>(|state| {
        if let Some(draft) = state.edit.draft_mut() {
            f(draft);
        }
    });
}

/// Discards the draft without any request.
pub fn cancel_edit(ctx: &mut StateCtx) {
    ctx.update::<EmployeeListState>(|state| state.edit = EditModal::Closed);
}

/// Sends the draft. Ignored unless the modal is `Editing`, so a second click
/// while submitting issues no second request.
pub fn submit_edit(ctx: &mut StateCtx) {
    let mut draft = None;
    ctx.update::<EmployeeListState>(|state| {
        if let EditModal::Editing(current) = &state.edit {
            let current = current.clone();
            state.edit = EditModal::Submitting(current.clone());
            draft = Some(current);
        }
    });

    let Some(draft) = draft else {
        return;
    };
    ctx.update::<EmployeeActionInput>(|input| input.employee = Some(draft.into_employee()));
    ctx.dispatch::<UpdateEmployeeCommand>();
}

pub fn request_delete(ctx: &mut StateCtx, employee: Employee) {
    ctx.update::<EmployeeListState>(|state| state.pending_delete = Some(employee));
}

/// Declining issues no request.
pub fn decline_delete(ctx: &mut StateCtx) {
    ctx.update::<EmployeeListState>(|state| state.pending_delete = None);
}

pub fn confirm_delete(ctx: &mut StateCtx) {
    let mut target = None;
    ctx.update::<EmployeeListState>(|state| target = state.pending_delete.take());

    let Some(employee) = target else {
        return;
    };
    ctx.update::<EmployeeActionInput>(|input| input.delete_id = Some(employee.id));
    ctx.dispatch::<DeleteEmployeeCommand>();
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_utils::{TestContext, sample_employee, sample_employees};

    #[tokio::test]
    async fn mount_loads_the_first_page() {
        let mut t = TestContext::new().await;
        t.mock_list_employees(1, "", sample_employees(0, 10), 2).await;

        t.settle().await;

        let list = t.ctx.compute::<EmployeeListCompute>();
        assert_eq!(list.status, FetchStatus::Loaded);
        assert_eq!(list.employees.len(), 10);
        assert_eq!(t.ctx.compute::<PaginationCompute>().label(), "Page 1 of 2");
        assert_eq!(t.list_request_count().await, 1);

        t.shutdown().await;
    }

    #[tokio::test]
    async fn paging_walks_twelve_records() {
        let mut t = TestContext::new().await;
        t.mock_list_employees(1, "", sample_employees(0, 10), 2).await;
        t.mock_list_employees(2, "", sample_employees(10, 2), 2).await;
        t.settle().await;

        next_page(&mut t.ctx);
        t.settle().await;

        let pagination = t.ctx.compute::<PaginationCompute>().clone();
        assert_eq!(pagination.label(), "Page 2 of 2");
        assert!(!pagination.has_next());
        assert_eq!(t.ctx.compute::<EmployeeListCompute>().employees.len(), 2);

        // Already on the last page: no request for page 3.
        next_page(&mut t.ctx);
        t.settle().await;
        assert_eq!(t.ctx.state::<EmployeeListQuery>().page(), 2);

        prev_page(&mut t.ctx);
        prev_page(&mut t.ctx);
        t.settle().await;
        assert_eq!(t.ctx.state::<EmployeeListQuery>().page(), 1);
        assert_eq!(t.list_request_count().await, 3);

        t.shutdown().await;
    }

    #[tokio::test]
    async fn failed_fetch_keeps_last_known_records() {
        let mut t = TestContext::new().await;
        t.mock_list_employees(1, "", sample_employees(0, 3), 1).await;
        t.settle().await;

        t.mock_server.reset().await;
        t.mock_list_error(500).await;
        refresh(&mut t.ctx);
        t.settle().await;

        let list = t.ctx.compute::<EmployeeListCompute>();
        assert!(matches!(
            list.error(),
            Some(crate::EmployeeApiError::Status { status: 500, .. })
        ));
        assert_eq!(list.employees.len(), 3);

        t.shutdown().await;
    }

    #[tokio::test]
    async fn narrower_search_clamps_the_page() {
        let mut t = TestContext::new().await;
        t.mock_list_employees(1, "", sample_employees(0, 10), 3).await;
        t.mock_list_employees(2, "", sample_employees(10, 10), 3).await;
        t.mock_list_employees(2, "ann", vec![], 1).await;
        t.mock_list_employees(1, "ann", vec![sample_employee("1")], 1).await;
        t.settle().await;
        next_page(&mut t.ctx);
        t.settle().await;

        set_search(&mut t.ctx, "ann");
        t.settle().await;

        assert_eq!(t.ctx.state::<EmployeeListQuery>().page(), 1);
        assert_eq!(t.ctx.compute::<EmployeeListCompute>().employees.len(), 1);
        assert_eq!(t.ctx.compute::<PaginationCompute>().label(), "Page 1 of 1");

        t.shutdown().await;
    }

    #[tokio::test]
    async fn stale_search_response_never_wins() {
        let mut t = TestContext::new().await;
        t.mock_list_employees_delayed(
            1,
            "slow",
            sample_employees(0, 5),
            1,
            Duration::from_millis(300),
        )
        .await;
        t.mock_list_employees(1, "fast", sample_employees(100, 1), 1).await;

        set_search(&mut t.ctx, "slow");
        t.ctx.sync_computes();
        sync_employee_list(&mut t.ctx);
        set_search(&mut t.ctx, "fast");
        t.settle().await;

        let list = t.ctx.compute::<EmployeeListCompute>();
        assert_eq!(list.employees.len(), 1);
        assert_eq!(list.loaded_key.as_ref().map(|k| k.search.as_str()), Some("fast"));

        t.shutdown().await;
    }

    #[tokio::test]
    async fn submit_closes_modal_and_refetches_once() {
        let mut t = TestContext::new().await;
        t.mock_list_employees(1, "", sample_employees(0, 2), 1).await;
        t.mock_update("1", 200, 1).await;
        t.settle().await;
        assert_eq!(t.list_request_count().await, 1);

        open_edit(&mut t.ctx, sample_employee("1"));
        edit_draft(&mut t.ctx, |draft| draft.employee_mut().name = "Renamed".to_owned());
        submit_edit(&mut t.ctx);
        assert!(t.ctx.state::<EmployeeListState>().edit().is_submitting());

        // A second click while submitting is ignored.
        submit_edit(&mut t.ctx);
        t.settle().await;

        assert_eq!(t.ctx.state::<EmployeeListState>().edit(), &EditModal::Closed);
        assert_eq!(t.list_request_count().await, 2);
        assert_eq!(
            t.ctx.compute::<EmployeeUpdateCompute>().state(),
            &EmployeeActionState::Idle
        );

        t.shutdown().await;
    }

    #[tokio::test]
    async fn failed_submit_keeps_the_draft_open() {
        let mut t = TestContext::new().await;
        t.mock_list_employees(1, "", sample_employees(0, 2), 1).await;
        t.mock_update("2", 500, 1).await;
        t.settle().await;

        open_edit(&mut t.ctx, sample_employee("2"));
        edit_draft(&mut t.ctx, |draft| draft.add_course());
        submit_edit(&mut t.ctx);
        t.settle().await;

        let edit = t.ctx.state::<EmployeeListState>().edit();
        assert!(matches!(edit, EditModal::Editing(_)));
        assert_eq!(edit.draft().map(|d| d.employee().course.len()), Some(2));
        assert_eq!(t.list_request_count().await, 1);

        t.shutdown().await;
    }

    #[tokio::test]
    async fn cancel_sends_no_update() {
        let mut t = TestContext::new().await;
        t.mock_list_employees(1, "", sample_employees(0, 2), 1).await;
        t.mock_update("1", 200, 0).await;
        t.settle().await;

        open_edit(&mut t.ctx, sample_employee("1"));
        edit_draft(&mut t.ctx, |draft| draft.employee_mut().email.clear());
        cancel_edit(&mut t.ctx);
        t.settle().await;

        assert!(!t.ctx.state::<EmployeeListState>().edit().is_open());
        assert_eq!(t.list_request_count().await, 1);

        t.shutdown().await;
    }

    #[tokio::test]
    async fn delete_requires_confirmation() {
        let mut t = TestContext::new().await;
        t.mock_list_employees(1, "", sample_employees(0, 2), 1).await;
        t.mock_delete("2", 200, 1).await;
        t.mock_delete("1", 200, 0).await;
        t.settle().await;

        request_delete(&mut t.ctx, sample_employee("1"));
        decline_delete(&mut t.ctx);
        t.settle().await;
        assert!(t.ctx.state::<EmployeeListState>().pending_delete().is_none());
        assert_eq!(t.list_request_count().await, 1);

        request_delete(&mut t.ctx, sample_employee("2"));
        confirm_delete(&mut t.ctx);
        t.settle().await;
        assert_eq!(t.list_request_count().await, 2);

        t.shutdown().await;
    }

    #[tokio::test]
    async fn update_and_delete_finishing_together_both_settle() {
        let mut t = TestContext::new().await;
        t.mock_list_employees(1, "", sample_employees(0, 2), 1).await;
        t.mock_update("1", 200, 1).await;
        t.mock_delete("2", 200, 1).await;
        t.settle().await;

        open_edit(&mut t.ctx, sample_employee("1"));
        submit_edit(&mut t.ctx);
        request_delete(&mut t.ctx, sample_employee("2"));
        confirm_delete(&mut t.ctx);

        // Both outcomes are queued before the next frame reads either.
        t.ctx.task_set_mut().join_next().await;
        t.ctx.task_set_mut().join_next().await;
        t.settle().await;

        assert_eq!(t.ctx.state::<EmployeeListState>().edit(), &EditModal::Closed);
        assert_eq!(
            t.ctx.compute::<EmployeeUpdateCompute>().state(),
            &EmployeeActionState::Idle
        );
        assert_eq!(
            t.ctx.compute::<EmployeeDeleteCompute>().state(),
            &EmployeeActionState::Idle
        );
        assert_eq!(t.list_request_count().await, 2);

        t.shutdown().await;
    }

    #[tokio::test]
    async fn refresh_signal_refetches_same_query() {
        let mut t = TestContext::new().await;
        t.mock_list_employees(1, "", sample_employees(0, 1), 1).await;
        t.settle().await;

        refresh(&mut t.ctx);
        t.settle().await;
        t.settle().await;

        assert_eq!(t.list_request_count().await, 2);

        t.shutdown().await;
    }
}
