mod employees;

pub use employees::{DELETE_PROMPT, SEARCH_HINT, employee_list_panel};
