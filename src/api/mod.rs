//! Remote Data Client
//!
//! Typed CRUD calls against the `employees` and `tasks` collections.
//! The wire is abstracted behind [`Transport`] so the same client runs on
//! `fetch` in the browser and on an in-memory service in tests.

mod fetch;
mod normalize;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{Record, ResourceKind};

pub use fetch::FetchTransport;
use normalize::parse_records;

/// Characters left as-is when an id is placed in a path segment
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected response status: {0}")]
    Status(u16),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Record without an id in response")]
    MissingId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A request relative to the service origin
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path starting with `/`
    pub path: String,
    /// JSON body
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Only read for successful responses
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn ensure_success(&self) -> Result<(), ClientError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ClientError::Status(self.status))
        }
    }
}

/// One request/response round trip
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

pub fn collection_path(kind: ResourceKind) -> String {
    format!("/{}/", kind.path())
}

pub fn record_path(kind: ResourceKind, id: &str) -> String {
    format!("/{}/{}", kind.path(), utf8_percent_encode(id, ID_SEGMENT))
}

#[derive(Debug, Clone)]
pub struct RestClient<T> {
    transport: T,
}

impl<T: Transport> RestClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the whole collection with identifiers normalised
    pub async fn list<R: Record>(&self) -> Result<Vec<R>, ClientError> {
        let response = self
            .transport
            .send(ApiRequest {
                method: Method::Get,
                path: collection_path(R::KIND),
                body: None,
            })
            .await?;
        response.ensure_success()?;
        parse_records(&response.body)
    }

    pub async fn create<R: Record>(&self, payload: &R::Payload) -> Result<(), ClientError> {
        let body = serde_json::to_string(payload)?;
        self.mutate(Method::Post, collection_path(R::KIND), Some(body)).await
    }

    /// Full replacement of the editable fields
    pub async fn update<R: Record>(&self, id: &str, payload: &R::Payload) -> Result<(), ClientError> {
        let body = serde_json::to_string(payload)?;
        self.mutate(Method::Put, record_path(R::KIND, id), Some(body)).await
    }

    pub async fn remove<R: Record>(&self, id: &str) -> Result<(), ClientError> {
        self.mutate(Method::Delete, record_path(R::KIND, id), None).await
    }

    async fn mutate(&self, method: Method, path: String, body: Option<String>) -> Result<(), ClientError> {
        let response = self.transport.send(ApiRequest { method, path, body }).await?;
        response.ensure_success()
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeService;
    use super::*;
    use crate::models::{Employee, EmployeePayload, Task, TaskPayload, TaskStatus};
    use futures::executor::block_on;
    use serde_json::json;

    fn ann() -> EmployeePayload {
        EmployeePayload {
            name: "Ann".into(),
            email: "a@x.com".into(),
            position: None,
            is_active: true,
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(collection_path(ResourceKind::Employees), "/employees/");
        assert_eq!(record_path(ResourceKind::Tasks, "65a1"), "/tasks/65a1");
        assert_eq!(record_path(ResourceKind::Tasks, "a b/c"), "/tasks/a%20b%2Fc");
    }

    #[test]
    fn test_create_then_list_assigns_id() {
        let client = RestClient::new(FakeService::new());
        block_on(client.create::<Employee>(&ann())).unwrap();

        let employees = block_on(client.list::<Employee>()).unwrap();
        assert_eq!(employees.len(), 1);
        assert!(!employees[0].id.is_empty());
        assert_eq!(employees[0].name, "Ann");
        assert_eq!(employees[0].position, None);
    }

    #[test]
    fn test_requests_use_collection_routes() {
        let client = RestClient::new(FakeService::new());
        let id = client.transport().seed("tasks", json!({ "title": "Old", "status": "pending" }));
        let payload = TaskPayload {
            title: "New".into(),
            description: None,
            status: TaskStatus::Done,
            employee_id: None,
        };
        block_on(client.update::<Task>(&id, &payload)).unwrap();
        block_on(client.remove::<Task>(&id)).unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[0], (Method::Put, format!("/tasks/{}", id)));
        assert_eq!(requests[1], (Method::Delete, format!("/tasks/{}", id)));
    }

    #[test]
    fn test_failure_status_is_error() {
        let client = RestClient::new(FakeService::new());
        client.transport().fail_next(500);
        let err = block_on(client.create::<Employee>(&ann())).unwrap_err();
        assert!(matches!(err, ClientError::Status(500)));
        assert!(client.transport().records("employees").is_empty());
    }

    #[test]
    fn test_list_failure_status() {
        let client = RestClient::new(FakeService::new());
        client.transport().fail_next(503);
        assert!(matches!(block_on(client.list::<Task>()), Err(ClientError::Status(503))));
    }

    #[test]
    fn test_remove_unknown_id_is_error() {
        let client = RestClient::new(FakeService::new());
        let err = block_on(client.remove::<Employee>("missing")).unwrap_err();
        assert!(matches!(err, ClientError::Status(404)));
    }
}
