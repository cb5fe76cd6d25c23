//! Inputs of the employee listing: page, search text and the refresh signal.

use std::any::Any;

use roster_states::{SnapshotClone, State, state_assign_impl};

/// Identity of one listing request. A new key means a new fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeListKey {
    pub page: u32,
    pub search: String,
    pub refresh_token: u64,
}

/// Page number (1-based), search text and refresh token for the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeListQuery {
    page: u32,
    search: String,
    refresh_token: u64,
}

impl Default for EmployeeListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            refresh_token: 0,
        }
    }
}

impl EmployeeListQuery {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn refresh_token(&self) -> u64 {
        self.refresh_token
    }

    pub fn key(&self) -> EmployeeListKey {
        EmployeeListKey {
            page: self.page,
            search: self.search.clone(),
            refresh_token: self.refresh_token,
        }
    }

    /// Moves one page forward, never past `total_pages`.
    pub fn next_page(&mut self, total_pages: u32) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    /// Moves one page back, never below 1.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Pulls the page back into `[1, total_pages]`. Returns whether it moved.
    pub fn clamp_to(&mut self, total_pages: u32) -> bool {
        let clamped = self.page.clamp(1, total_pages.max(1));
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }

    /// Replaces the search text. The page is left alone and clamped once the
    /// new result reports its page count.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// External refresh signal: forces a re-fetch with the same page and search.
    pub fn refresh(&mut self) {
        self.refresh_token = self.refresh_token.wrapping_add(1);
    }
}

impl SnapshotClone for EmployeeListQuery {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for EmployeeListQuery {
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
