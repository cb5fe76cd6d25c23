//! Mock-server helpers for business layer tests.
//!
//! ```ignore
//! let mut test_ctx = TestContext::new().await;
//! test_ctx.mock_list_employees(1, "", sample_employees(3), 1).await;
//! test_ctx.settle().await;
//! assert_eq!(test_ctx.ctx.compute::<EmployeeListCompute>().employees.len(), 3);
//! ```

#![cfg(test)]

use std::time::{Duration, Instant};

use roster_states::StateCtx;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::employee_list::{register_employee_list, workflow};
use crate::{BusinessConfig, Employee};

/// A mock server plus a `StateCtx` pointed at it.
pub struct TestContext {
    pub mock_server: MockServer,
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;
        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::new(mock_server.uri()));
        register_employee_list(&mut ctx);

        Self { mock_server, ctx }
    }

    /// Runs frames until no command is pending: sync computes, reconcile the
    /// list, await the next finished task.
    pub async fn settle(&mut self) {
        let timeout = Duration::from_secs(5);
        let start = Instant::now();

        loop {
            self.ctx.sync_computes();
            workflow::sync_employee_list(&mut self.ctx);
            if self.ctx.task_count() == 0 {
                break;
            }

            assert!(
                start.elapsed() < timeout,
                "Timed out waiting for pending tasks ({} still in JoinSet)",
                self.ctx.task_count()
            );
            self.ctx.task_set_mut().join_next().await;
        }
    }

    pub async fn shutdown(&mut self) {
        self.ctx.shutdown().await;
    }

    pub async fn mock_list_employees(
        &self,
        page: u32,
        search: &str,
        employees: Vec<Employee>,
        total_pages: u32,
    ) {
        self.mock_list_employees_delayed(page, search, employees, total_pages, Duration::ZERO)
            .await;
    }

    pub async fn mock_list_employees_delayed(
        &self,
        page: u32,
        search: &str,
        employees: Vec<Employee>,
        total_pages: u32,
        delay: Duration,
    ) {
        let response = ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({
                "employees": employees,
                "totalPages": total_pages
            }))
            .set_delay(delay);

        Mock::given(method("GET"))
            .and(path("/api/employees"))
            .and(query_param("page", page.to_string()))
            .and(query_param("search", search))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_list_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/api/employees"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock_server)
            .await;
    }

    /// PUT `/api/employees/{id}`, expected exactly `times` times.
    pub async fn mock_update(&self, id: &str, status: u16, times: u64) {
        Mock::given(method("PUT"))
            .and(path(format!("/api/employees/{id}")))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.mock_server)
            .await;
    }

    /// DELETE `/api/employees/{id}`, expected exactly `times` times.
    pub async fn mock_delete(&self, id: &str, status: u16, times: u64) {
        Mock::given(method("DELETE"))
            .and(path(format!("/api/employees/{id}")))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.mock_server)
            .await;
    }

    /// Number of listing requests the server has seen.
    pub async fn list_request_count(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.method.as_str() == "GET" && req.url.path() == "/api/employees")
            .count()
    }
}

pub fn sample_employee(id: &str) -> Employee {
    Employee {
        id: id.into(),
        name: format!("Employee {id}"),
        email: format!("employee{id}@example.com"),
        mobile: format!("555010{id}"),
        designation: "HR".to_owned(),
        gender: "F".to_owned(),
        course: vec!["MCA".to_owned()],
        image: format!("https://img.example.com/{id}.png"),
    }
}

/// `count` employees with ids `offset + 1 ..= offset + count`.
pub fn sample_employees(offset: usize, count: usize) -> Vec<Employee> {
    (offset + 1..=offset + count)
        .map(|i| sample_employee(&i.to_string()))
        .collect()
}
