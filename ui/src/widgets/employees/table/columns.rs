//! Column definitions for the employee table.

/// Column titles in display order.
pub const HEADERS: [&str; 8] = [
    "Image",
    "Name",
    "Email",
    "Mobile",
    "Designation",
    "Gender",
    "Course",
    "Actions",
];

pub const COLUMN_COUNT: usize = HEADERS.len();
pub const MIN_COLUMN_WIDTH: f32 = 60.0;
