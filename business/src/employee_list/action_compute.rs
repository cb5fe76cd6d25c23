//! Update/delete actions on a single employee.
//!
//! The UI fills [`EmployeeActionInput`], dispatches one of the commands and
//! reads the outcome from [`EmployeeUpdateCompute`] or
//! [`EmployeeDeleteCompute`]. Follow-up state changes (closing the edit modal,
//! re-fetching) happen in `workflow`.

use std::any::Any;

use roster_states::{
    Command, CommandFuture, CommandSnapshot, Compute, ComputeDeps, Dep, LatestOnlyUpdater,
    SnapshotClone, State, Updater, assign_impl, state_assign_impl,
};
use tokio_util::sync::CancellationToken;
use ustr::Ustr;

use super::api::{self, EmployeeApiError};
use crate::BusinessConfig;
use crate::employee::Employee;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeActionKind {
    Update,
    Delete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EmployeeActionState {
    #[default]
    Idle,
    InFlight {
        kind: EmployeeActionKind,
        id: Ustr,
    },
    Success {
        kind: EmployeeActionKind,
        id: Ustr,
    },
    Error {
        kind: EmployeeActionKind,
        id: Ustr,
        error: EmployeeApiError,
    },
}

/// Outcome of the latest `UpdateEmployeeCommand`.
///
/// Update and delete report into separate computes so that one finishing
/// never hides the other's outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeUpdateCompute {
    pub state: EmployeeActionState,
}

impl EmployeeUpdateCompute {
    pub fn state(&self) -> &EmployeeActionState {
        &self.state
    }

    fn set(updater: &LatestOnlyUpdater, state: EmployeeActionState) {
        updater.set(Self { state });
    }
}

impl SnapshotClone for EmployeeUpdateCompute {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for EmployeeUpdateCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::none()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Written by UpdateEmployeeCommand only.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Outcome of the latest `DeleteEmployeeCommand`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDeleteCompute {
    pub state: EmployeeActionState,
}

impl EmployeeDeleteCompute {
    pub fn state(&self) -> &EmployeeActionState {
        &self.state
    }

    fn set(updater: &LatestOnlyUpdater, state: EmployeeActionState) {
        updater.set(Self { state });
    }
}

impl SnapshotClone for EmployeeDeleteCompute {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for EmployeeDeleteCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::none()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Written by DeleteEmployeeCommand only.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Arguments for the action commands, set right before dispatch.
#[derive(Debug, Clone, Default)]
pub struct EmployeeActionInput {
    /// Full record for `UpdateEmployeeCommand`.
    pub employee: Option<Employee>,
    /// Target for `DeleteEmployeeCommand`.
    pub delete_id: Option<Ustr>,
}

impl SnapshotClone for EmployeeActionInput {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for EmployeeActionInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// PUT the draft held in `EmployeeActionInput::employee`.
#[derive(Debug, Default)]
pub struct UpdateEmployeeCommand;

impl Command for UpdateEmployeeCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let employee = snap.state::<EmployeeActionInput>().employee.clone();
        let api_url = snap.state::<BusinessConfig>().api_url();

        Box::pin(async move {
            let Some(employee) = employee else {
                log::warn!("UpdateEmployeeCommand dispatched without a draft");
                return;
            };
            let kind = EmployeeActionKind::Update;
            let id = employee.id;

            EmployeeUpdateCompute::set(&updater, EmployeeActionState::InFlight { kind, id });

            match api::update_employee(api_url.as_str(), &employee).await {
                Ok(()) => {
                    EmployeeUpdateCompute::set(&updater, EmployeeActionState::Success { kind, id });
                }
                Err(error) => {
                    log::error!("Error updating employee {id}: {error}");
                    EmployeeUpdateCompute::set(
                        &updater,
                        EmployeeActionState::Error { kind, id, error },
                    );
                }
            }
        })
    }
}

/// DELETE the record named by `EmployeeActionInput::delete_id`.
#[derive(Debug, Default)]
pub struct DeleteEmployeeCommand;

impl Command for DeleteEmployeeCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let delete_id = snap.state::<EmployeeActionInput>().delete_id;
        let api_url = snap.state::<BusinessConfig>().api_url();

        Box::pin(async move {
            let Some(id) = delete_id else {
                log::warn!("DeleteEmployeeCommand dispatched without an id");
                return;
            };
            let kind = EmployeeActionKind::Delete;

            EmployeeDeleteCompute::set(&updater, EmployeeActionState::InFlight { kind, id });

            match api::delete_employee(api_url.as_str(), id.as_str()).await {
                Ok(()) => {
                    EmployeeDeleteCompute::set(&updater, EmployeeActionState::Success { kind, id });
                }
                Err(error) => {
                    log::error!("Error deleting employee {id}: {error}");
                    EmployeeDeleteCompute::set(
                        &updater,
                        EmployeeActionState::Error { kind, id, error },
                    );
                }
            }
        })
    }
}
