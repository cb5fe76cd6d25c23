use std::any::{Any, TypeId};

use roster_states::{Compute, ComputeDeps, Dep, SnapshotClone, Updater, assign_impl};

use super::list_compute::EmployeeListCompute;
use super::query::EmployeeListQuery;

/// Pagination controls derived from the query and the last loaded page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCompute {
    pub page: u32,
    pub total_pages: u32,
}

impl Default for PaginationCompute {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }
}

impl PaginationCompute {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

impl SnapshotClone for PaginationCompute {}

impl Compute for PaginationCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new(
            vec![TypeId::of::<EmployeeListQuery>()],
            vec![TypeId::of::<EmployeeListCompute>()],
        )
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let query = deps.get_state_ref::<EmployeeListQuery>();
        let list = deps.get_compute_ref::<EmployeeListCompute>();

        let next = Self {
            page: query.page(),
            total_pages: list.total_pages.max(1),
        };
        if &next != self {
            updater.set(next);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
