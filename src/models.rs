//! Frontend Models
//!
//! Records as the remote service returns them, and the payloads sent back.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The two collections the service exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Employees,
    Tasks,
}

impl ResourceKind {
    /// Path segment under the service origin
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Employees => "employees",
            ResourceKind::Tasks => "tasks",
        }
    }

    /// Capitalised singular, used in titles and success messages
    pub fn noun(&self) -> &'static str {
        match self {
            ResourceKind::Employees => "Employee",
            ResourceKind::Tasks => "Task",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Employees => "employee",
            ResourceKind::Tasks => "task",
        }
    }

    pub fn plural(&self) -> &'static str {
        self.path()
    }
}

/// A record type served by one of the collections
pub trait Record: Clone + DeserializeOwned + 'static {
    const KIND: ResourceKind;

    /// Body of create/update requests
    type Payload: Serialize;

    fn id(&self) -> &str;
}

/// Employee data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Record for Employee {
    const KIND: ResourceKind = ResourceKind::Employees;
    type Payload = EmployeePayload;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Create/update body for employees
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeePayload {
    pub name: String,
    pub email: String,
    pub position: Option<String>,
    pub is_active: bool,
}

/// Task status. Unknown strings from the service read as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// Unknown strings read as `Pending`
    pub fn from_wire(s: &str) -> Self {
        match s {
            "in_progress" => TaskStatus::InProgress,
            "done" => TaskStatus::Done,
            _ => TaskStatus::Pending,
        }
    }

    /// Badge text shown on cards
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        TaskStatus::from_wire(&s)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub employee_id: Option<String>,
}

impl Record for Task {
    const KIND: ResourceKind = ResourceKind::Tasks;
    type Payload = TaskPayload;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Create/update body for tasks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub employee_id: Option<String>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_strings() {
        assert_eq!(TaskStatus::InProgress.as_str(), "in_progress");
        assert_eq!(TaskStatus::from_wire("done"), TaskStatus::Done);
        assert_eq!(TaskStatus::from_wire("archived"), TaskStatus::Pending);
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn test_task_defaults_when_fields_missing() {
        let task: Task = serde_json::from_value(json!({ "id": "t1", "title": "Write" })).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.description, None);
        assert_eq!(task.employee_id, None);
    }

    #[test]
    fn test_employee_defaults_active() {
        let emp: Employee =
            serde_json::from_value(json!({ "id": "e1", "name": "Ann", "email": "a@x.com" })).unwrap();
        assert!(emp.is_active);
        assert_eq!(emp.position, None);
    }

    #[test]
    fn test_payload_sends_nulls() {
        let payload = TaskPayload {
            title: "Ship".into(),
            description: None,
            status: TaskStatus::InProgress,
            employee_id: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "title": "Ship", "description": null, "status": "in_progress", "employee_id": null })
        );
    }
}
