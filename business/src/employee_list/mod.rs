//! Employee list domain module.
//!
//! Home for everything the employee list panel keeps in `StateCtx`:
//! - States: [`EmployeeListQuery`], [`EmployeeListState`], [`EmployeeActionInput`]
//! - Computes: [`EmployeeListCompute`], [`EmployeeUpdateCompute`] and
//!   [`EmployeeDeleteCompute`] (written by
//!   commands), [`PaginationCompute`] (derived)
//! - Commands: [`FetchEmployeesCommand`], [`UpdateEmployeeCommand`],
//!   [`DeleteEmployeeCommand`]
//!
//! UI code reads via `ctx.cached::<T>()` / `ctx.state::<T>()` and changes
//! things through [`workflow`].

pub mod action_compute;
pub mod api;
pub mod list_compute;
pub mod pagination;
pub mod query;
pub mod state;
pub mod workflow;

use roster_states::StateCtx;

pub use action_compute::{
    DeleteEmployeeCommand, EmployeeActionInput, EmployeeActionKind, EmployeeActionState,
    EmployeeDeleteCompute, EmployeeUpdateCompute, UpdateEmployeeCommand,
};
pub use api::{ApiResult, EmployeeApiError};
pub use list_compute::{EmployeeListCompute, FetchEmployeesCommand, FetchStatus};
pub use pagination::PaginationCompute;
pub use query::{EmployeeListKey, EmployeeListQuery};
pub use state::{EditModal, EmployeeDraft, EmployeeListState};

/// Registers every state, compute and command of the employee list.
///
/// `BusinessConfig` is registered separately by the owner of the context.
pub fn register_employee_list(ctx: &mut StateCtx) {
    ctx.add_state(EmployeeListQuery::default());
    ctx.add_state(EmployeeListState::default());
    ctx.add_state(EmployeeActionInput::default());

    ctx.record_compute(EmployeeListCompute::default());
    ctx.record_compute(EmployeeUpdateCompute::default());
    ctx.record_compute(EmployeeDeleteCompute::default());
    ctx.record_compute(PaginationCompute::default());

    ctx.record_command(FetchEmployeesCommand);
    ctx.record_command(UpdateEmployeeCommand);
    ctx.record_command(DeleteEmployeeCommand);
}
