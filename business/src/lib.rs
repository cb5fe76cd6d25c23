//! Business layer of the roster client: configuration, HTTP, the employee
//! model and the employee list states, computes and commands.

mod config;
pub mod employee;
pub mod employee_list;
pub mod http;
mod test_utils;

pub use config::{BusinessConfig, ConfigError};
pub use employee::{Employee, EmployeePage};
pub use employee_list::{
    DeleteEmployeeCommand, EditModal, EmployeeActionInput, EmployeeActionKind,
    EmployeeActionState, EmployeeApiError, EmployeeDeleteCompute, EmployeeDraft,
    EmployeeListCompute, EmployeeListKey, EmployeeListQuery, EmployeeListState,
    EmployeeUpdateCompute, FetchEmployeesCommand, FetchStatus, PaginationCompute,
    UpdateEmployeeCommand, register_employee_list, workflow,
};
