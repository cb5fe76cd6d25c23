//! Wire types for the employees API.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// One employee record, as returned by `GET /employees` and sent back whole
/// by `PUT /employees/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", alias = "id")]
    pub id: Ustr,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub designation: String,
    pub gender: String,
    /// Ordered course names.
    pub course: Vec<String>,
    /// Image URL.
    pub image: String,
}

impl Employee {
    /// Courses as shown in the table's Course column.
    pub fn course_label(&self) -> String {
        self.course.join(", ")
    }
}

/// Body of `GET /employees`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePage {
    pub employees: Vec<Employee>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl EmployeePage {
    /// Page count with a floor of 1; an empty result still has one page.
    pub fn page_count(&self) -> u32 {
        self.total_pages.max(1)
    }
}
