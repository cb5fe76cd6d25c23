//! UI-side state of the employee list: edit modal, draft and pending delete.
//!
//! Lives here rather than in the UI crate so the widgets only render and
//! call into `workflow`.

use std::any::Any;

use roster_states::{SnapshotClone, State};

use super::query::EmployeeListKey;
use crate::employee::Employee;

/// Editable copy of one record. Discarded on cancel, sent whole on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    employee: Employee,
}

impl EmployeeDraft {
    pub fn new(employee: Employee) -> Self {
        Self { employee }
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn employee_mut(&mut self) -> &mut Employee {
        &mut self.employee
    }

    pub fn into_employee(self) -> Employee {
        self.employee
    }

    pub fn courses_mut(&mut self) -> &mut Vec<String> {
        &mut self.employee.course
    }

    pub fn add_course(&mut self) {
        self.employee.course.push(String::new());
    }

    pub fn remove_course(&mut self, index: usize) {
        if index < self.employee.course.len() {
            self.employee.course.remove(index);
        }
    }
}

/// `Closed -> Editing -> Submitting -> Closed`; a failed submit goes back to
/// `Editing` with the draft untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditModal {
    #[default]
    Closed,
    Editing(EmployeeDraft),
    Submitting(EmployeeDraft),
}

impl EditModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    pub fn draft(&self) -> Option<&EmployeeDraft> {
        match self {
            Self::Closed => None,
            Self::Editing(draft) | Self::Submitting(draft) => Some(draft),
        }
    }

    /// Only an `Editing` draft accepts changes.
    pub fn draft_mut(&mut self) -> Option<&mut EmployeeDraft> {
        match self {
            Self::Editing(draft) => Some(draft),
            Self::Closed | Self::Submitting(_) => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct EmployeeListState {
    /// Last query a fetch was dispatched for.
    pub last_requested: Option<EmployeeListKey>,
    pub edit: EditModal,
    /// Record awaiting delete confirmation.
    pub pending_delete: Option<Employee>,
}

impl EmployeeListState {
    pub fn edit(&self) -> &EditModal {
        &self.edit
    }

    pub fn pending_delete(&self) -> Option<&Employee> {
        self.pending_delete.as_ref()
    }
}

impl SnapshotClone for EmployeeListState {}

impl State for EmployeeListState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, _new_self: Box<dyn Any + Send>) {
        log::warn!("EmployeeListState is mutated in place and never assigned");
    }
}
