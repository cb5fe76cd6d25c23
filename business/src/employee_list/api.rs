//! Employees API calls.
//!
//! Used by the commands in this module; each call maps its outcome into a
//! typed [`EmployeeApiError`] and leaves state handling to the caller.

use crate::employee::{Employee, EmployeePage};
use crate::http::{Client, HttpError, Response};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse {what}: {message}")]
    Decode { what: &'static str, message: String },

    #[error("failed to serialize request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, EmployeeApiError>;

fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(EmployeeApiError::Status {
            status: response.status,
            body: response.text().unwrap_or_default(),
        })
    }
}

/// GET `/employees?page={page}&search={search}`
pub async fn list_employees(api_base_url: &str, page: u32, search: &str) -> ApiResult<EmployeePage> {
    let url = format!("{api_base_url}/employees");

    let response = Client::get(url)
        .query("page", page)
        .query("search", search)
        .send()
        .await?;
    let response = ensure_success(response)?;

    response.json().map_err(|e| EmployeeApiError::Decode {
        what: "EmployeePage",
        message: e.to_string(),
    })
}

/// PUT `/employees/{id}` with the full record as the body.
pub async fn update_employee(api_base_url: &str, employee: &Employee) -> ApiResult<()> {
    let url = format!("{api_base_url}/employees/{}", employee.id);

    let request = Client::put(url)
        .json(employee)
        .map_err(|e| EmployeeApiError::Encode(e.to_string()))?;

    ensure_success(request.send().await?).map(|_| ())
}

/// DELETE `/employees/{id}`
pub async fn delete_employee(api_base_url: &str, id: &str) -> ApiResult<()> {
    let url = format!("{api_base_url}/employees/{id}");

    ensure_success(Client::delete(url).send().await?).map(|_| ())
}
