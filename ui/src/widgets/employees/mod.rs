//! Employee list widget.
//!
//! - `panel`: entry point composing the pieces below
//! - `search`: title and search box
//! - `table`: records grid with per-row Edit / Delete
//! - `pagination`: Previous / Next and the page label
//! - `modals`: edit dialog and delete confirmation
//! - `style`: colors and sizes scoped to this widget

mod modals;
mod pagination;
mod panel;
mod search;
pub mod style;
pub mod table;

pub use modals::DELETE_PROMPT;
pub use panel::employee_list_panel;
pub use search::SEARCH_HINT;
