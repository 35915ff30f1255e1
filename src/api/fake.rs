//! In-memory stand-in for the remote service
//!
//! Behaves like the real one where the client can observe it: records are
//! returned with `_id`, create answers 201, delete answers 204, unknown ids
//! answer 404. `fail_next` injects a status for the next request.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{ApiRequest, ApiResponse, ClientError, Method, Transport};

#[derive(Default)]
struct FakeState {
    collections: HashMap<String, Vec<Value>>,
    next_id: u32,
    fail_next: Option<u16>,
    unreachable: bool,
    requests: Vec<(Method, String)>,
}

#[derive(Default)]
pub struct FakeService {
    state: RefCell<FakeState>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record directly, returning its assigned id
    pub fn seed(&self, resource: &str, record: Value) -> String {
        let mut state = self.state.borrow_mut();
        let id = state.allocate_id();
        let mut obj = record.as_object().cloned().unwrap_or_default();
        obj.insert("_id".to_string(), Value::String(id.clone()));
        state.collections.entry(resource.to_string()).or_default().push(Value::Object(obj));
        id
    }

    pub fn fail_next(&self, status: u16) {
        self.state.borrow_mut().fail_next = Some(status);
    }

    /// Every following request fails before reaching the service
    pub fn set_unreachable(&self, unreachable: bool) {
        self.state.borrow_mut().unreachable = unreachable;
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.state.borrow().requests.clone()
    }

    pub fn records(&self, resource: &str) -> Vec<Value> {
        self.state.borrow().collections.get(resource).cloned().unwrap_or_default()
    }
}

impl FakeState {
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("{:024x}", self.next_id)
    }

    fn handle(&mut self, request: &ApiRequest) -> ApiResponse {
        let segments: Vec<&str> = request.path.trim_matches('/').split('/').collect();
        let resource = segments[0].to_string();
        let id = segments.get(1).copied();
        let body: Option<Map<String, Value>> = request
            .body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok());

        match (request.method, id, body) {
            (Method::Get, None, _) => {
                let items = self.collections.get(&resource).cloned().unwrap_or_default();
                json_response(200, &Value::Array(items))
            }
            (Method::Post, None, Some(mut obj)) => {
                let new_id = self.allocate_id();
                obj.insert("_id".to_string(), Value::String(new_id));
                obj.insert("created_at".to_string(), Value::String("2024-01-01T00:00:00".into()));
                let record = Value::Object(obj);
                self.collections.entry(resource).or_default().push(record.clone());
                json_response(201, &record)
            }
            (Method::Put, Some(id), Some(obj)) => {
                let found = self
                    .collections
                    .entry(resource)
                    .or_default()
                    .iter_mut()
                    .find(|r| r["_id"] == id);
                match found {
                    Some(Value::Object(existing)) => {
                        existing.extend(obj);
                        let record = Value::Object(existing.clone());
                        json_response(200, &record)
                    }
                    _ => empty(404),
                }
            }
            (Method::Delete, Some(id), _) => {
                let items = self.collections.entry(resource).or_default();
                let before = items.len();
                items.retain(|r| r["_id"] != id);
                if items.len() < before {
                    empty(204)
                } else {
                    empty(404)
                }
            }
            _ => empty(422),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeService {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let mut state = self.state.borrow_mut();
        state.requests.push((request.method, request.path.clone()));
        if state.unreachable {
            return Err(ClientError::Transport("connection refused".to_string()));
        }
        if let Some(status) = state.fail_next.take() {
            return Ok(empty(status));
        }
        Ok(state.handle(&request))
    }
}

fn json_response(status: u16, value: &Value) -> ApiResponse {
    ApiResponse {
        status,
        body: value.to_string(),
    }
}

fn empty(status: u16) -> ApiResponse {
    ApiResponse {
        status,
        body: String::new(),
    }
}
