use std::time::Duration;

use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Upper bound of frames spent waiting for network tasks.
pub const MAX_NETWORK_FRAMES: usize = 100;
pub const NETWORK_POLL_MS: u64 = 20;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    /// Builds the app against `mock_server`.
    ///
    /// Mount the listing mocks first: the first frame already fetches.
    pub fn new(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let app = RosterApp::new(State::test(mock_server.uri()));
        let harness = Harness::builder()
            .with_size(egui::vec2(1400.0, 900.0))
            .build_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, RosterApp> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Steps frames until no command task is left, then renders once more.
    pub async fn wait_for_network(&mut self) {
        for _ in 0..MAX_NETWORK_FRAMES {
            self.harness.step();
            if self.harness.state().state().ctx.task_count() == 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(NETWORK_POLL_MS)).await;
        }
        assert_eq!(
            self.harness.state().state().ctx.task_count(),
            0,
            "network tasks did not finish in time"
        );
        self.harness.step();
    }

    /// Number of `GET /api/employees` requests seen so far.
    #[allow(unused)]
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

pub fn employee_json(index: usize) -> serde_json::Value {
    serde_json::json!({
        "_id": format!("e{index}"),
        "name": format!("Employee {index}"),
        "email": format!("employee{index}@example.com"),
        "mobile": format!("55501{index:02}"),
        "designation": "Sales",
        "gender": "M",
        "course": ["BCA"],
        "image": ""
    })
}

/// Mounts `GET /api/employees?page={page}&search={search}` returning
/// records `first ..= last`.
pub async fn mock_list(
    server: &MockServer,
    page: u32,
    search: &str,
    records: std::ops::RangeInclusive<usize>,
    total_pages: u32,
) {
    let employees: Vec<_> = records.map(employee_json).collect();

    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .and(query_param("page", page.to_string()))
        .and(query_param("search", search))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "employees": employees,
            "totalPages": total_pages
        })))
        .mount(server)
        .await;
}

/// Mounts a `PUT` or `DELETE` on `/api/employees/{id}` expected `times` times.
pub async fn mock_write(server: &MockServer, verb: &str, id: &str, status: u16, times: u64) {
    Mock::given(method(verb))
        .and(path(format!("/api/employees/{id}")))
        .respond_with(ResponseTemplate::new(status))
        .expect(times)
        .mount(server)
        .await;
}
