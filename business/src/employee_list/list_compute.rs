//! Cached employee page plus the command that fetches it.
//!
//! `FetchEmployeesCommand` reads [`EmployeeListQuery`] from the snapshot,
//! calls the listing endpoint and publishes an [`EmployeeListCompute`]. On
//! failure the previous records and page count are kept and only the status
//! changes.

use std::any::Any;

use roster_states::{
    Command, CommandFuture, CommandSnapshot, Compute, ComputeDeps, Dep, LatestOnlyUpdater,
    SnapshotClone, Updater, assign_impl,
};
use tokio_util::sync::CancellationToken;

use super::api::{self, EmployeeApiError};
use super::query::{EmployeeListKey, EmployeeListQuery};
use crate::BusinessConfig;
use crate::employee::Employee;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Logged only; the UI keeps showing the last-known records.
    Error(EmployeeApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeListCompute {
    pub status: FetchStatus,
    pub employees: Vec<Employee>,
    /// Always at least 1.
    pub total_pages: u32,
    /// Query the current `employees` were loaded for.
    pub loaded_key: Option<EmployeeListKey>,
}

impl Default for EmployeeListCompute {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            employees: Vec::new(),
            total_pages: 1,
            loaded_key: None,
        }
    }
}

impl EmployeeListCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn error(&self) -> Option<&EmployeeApiError> {
        match &self.status {
            FetchStatus::Error(err) => Some(err),
            _ => None,
        }
    }

    fn with_status(&self, status: FetchStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl SnapshotClone for EmployeeListCompute {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for EmployeeListCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::none()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Written by `FetchEmployeesCommand` only.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Fetches the page described by the current [`EmployeeListQuery`].
#[derive(Debug, Default)]
pub struct FetchEmployeesCommand;

impl Command for FetchEmployeesCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let key = snap.state::<EmployeeListQuery>().key();
        let api_url = snap.state::<BusinessConfig>().api_url();
        let previous = snap.compute::<EmployeeListCompute>().clone();

        Box::pin(async move {
            updater.set(previous.with_status(FetchStatus::Loading));

            match api::list_employees(api_url.as_str(), key.page, &key.search).await {
                Ok(page) => {
                    log::debug!(
                        "loaded {} employees for page {} of {}",
                        page.employees.len(),
                        key.page,
                        page.total_pages
                    );
                    let total_pages = page.page_count();
                    updater.set(EmployeeListCompute {
                        status: FetchStatus::Loaded,
                        employees: page.employees,
                        total_pages,
                        loaded_key: Some(key),
                    });
                }
                Err(err) => {
                    log::error!("Error fetching employees: {err}");
                    updater.set(previous.with_status(FetchStatus::Error(err)));
                }
            }
        })
    }
}
