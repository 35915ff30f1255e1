//! Form Controller
//!
//! Add/edit form lifecycle shared by both resources. A form is either
//! closed (viewing), open for a new record, or open for an existing one.

use crate::models::{Employee, EmployeePayload, Record, Task, TaskPayload, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Viewing,
    EditingNew,
    EditingExisting(String),
}

/// Field values of an open form
pub trait FormDraft: Default + Clone {
    type Record: Record;

    fn from_record(record: &Self::Record) -> Self;

    /// Blank optional fields become `None`; blank required fields are rejected
    fn to_payload(&self) -> Result<<Self::Record as Record>::Payload, FormError>;
}

/// What to send: `id` is `None` for a create
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<P> {
    pub id: Option<String>,
    pub payload: P,
}

#[derive(Debug, Clone, Default)]
pub struct FormState<D> {
    mode: FormMode,
    pub draft: D,
}

impl<D: FormDraft> FormState<D> {
    pub fn open_blank(&mut self) {
        self.draft = D::default();
        self.mode = FormMode::EditingNew;
    }

    pub fn open_record(&mut self, record: &D::Record) {
        self.draft = D::from_record(record);
        self.mode = FormMode::EditingExisting(record.id().to_string());
    }

    /// Hide the form. Field values stay until the next open.
    pub fn close(&mut self) {
        self.mode = FormMode::Viewing;
    }

    #[cfg(test)]
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Viewing
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::EditingExisting(id) => Some(id),
            _ => None,
        }
    }

    pub fn title(&self) -> String {
        let noun = <D::Record as Record>::KIND.noun();
        match self.mode {
            FormMode::EditingExisting(_) => format!("Edit {}", noun),
            _ => format!("Add New {}", noun),
        }
    }

    pub fn submission(&self) -> Result<Submission<<D::Record as Record>::Payload>, FormError> {
        Ok(Submission {
            id: self.editing_id().map(str::to_string),
            payload: self.draft.to_payload()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub position: String,
    pub is_active: bool,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            position: String::new(),
            is_active: true,
        }
    }
}

impl FormDraft for EmployeeDraft {
    type Record = Employee;

    fn from_record(record: &Employee) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            position: record.position.clone().unwrap_or_default(),
            is_active: record.is_active,
        }
    }

    fn to_payload(&self) -> Result<EmployeePayload, FormError> {
        Ok(EmployeePayload {
            name: required(&self.name, "Name")?,
            email: required(&self.email, "Email")?,
            position: optional(&self.position),
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Empty means unassigned
    pub employee_id: String,
}

impl FormDraft for TaskDraft {
    type Record = Task;

    fn from_record(record: &Task) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone().unwrap_or_default(),
            status: record.status,
            employee_id: record.employee_id.clone().unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<TaskPayload, FormError> {
        Ok(TaskPayload {
            title: required(&self.title, "Title")?,
            description: optional(&self.description),
            status: self.status,
            employee_id: optional(&self.employee_id),
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
