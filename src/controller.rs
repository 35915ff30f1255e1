//! Application Controller
//!
//! Owns both collections, both forms and the current notification. The
//! async drivers at the bottom never hold the controller across a network
//! call: they borrow it through a [`ControllerCell`] before and after.

use std::cell::RefCell;

use leptos::logging::{error, log, warn};

use crate::api::{ClientError, RestClient, Transport};
use crate::form::{EmployeeDraft, FormDraft, FormState, Submission, TaskDraft};
use crate::models::{Employee, Record, ResourceKind, Task};
use crate::notification::{Notification, NotificationKind};
use crate::view::{self, ListView, SelectOption};

/// A resource the controller manages
pub trait Managed: Record {
    type Draft: FormDraft<Record = Self> + Send + Sync;

    fn slot(ctrl: &AppController) -> &ResourceState<Self>;
    fn slot_mut(ctrl: &mut AppController) -> &mut ResourceState<Self>;
}

impl Managed for Employee {
    type Draft = EmployeeDraft;

    fn slot(ctrl: &AppController) -> &ResourceState<Self> {
        &ctrl.employees
    }

    fn slot_mut(ctrl: &mut AppController) -> &mut ResourceState<Self> {
        &mut ctrl.employees
    }
}

impl Managed for Task {
    type Draft = TaskDraft;

    fn slot(ctrl: &AppController) -> &ResourceState<Self> {
        &ctrl.tasks
    }

    fn slot_mut(ctrl: &mut AppController) -> &mut ResourceState<Self> {
        &mut ctrl.tasks
    }
}

/// Per-resource state: collection, form, in-flight flag and delete awaiting confirmation
#[derive(Clone)]
pub struct ResourceState<R: Managed> {
    items: Vec<R>,
    form: FormState<R::Draft>,
    in_flight: bool,
    pending_delete: Option<String>,
}

impl<R: Managed> Default for ResourceState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            form: FormState::default(),
            in_flight: false,
            pending_delete: None,
        }
    }
}

#[derive(Clone, Default)]
pub struct AppController {
    employees: ResourceState<Employee>,
    tasks: ResourceState<Task>,
    assignment_options: Vec<SelectOption>,
    notification: Option<Notification>,
    next_seq: u64,
}

impl AppController {
    pub fn new() -> Self {
        Self {
            assignment_options: view::assignment_options(&[]),
            ..Default::default()
        }
    }

    // ========================
    // Read access
    // ========================

    pub fn items<R: Managed>(&self) -> &[R] {
        &R::slot(self).items
    }

    pub fn form<R: Managed>(&self) -> &FormState<R::Draft> {
        &R::slot(self).form
    }

    /// A save or delete for this resource is awaiting the service
    pub fn is_busy<R: Managed>(&self) -> bool {
        R::slot(self).in_flight
    }

    pub fn pending_delete<R: Managed>(&self) -> Option<&str> {
        R::slot(self).pending_delete.as_deref()
    }

    pub fn assignment_options(&self) -> &[SelectOption] {
        &self.assignment_options
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn employee_view(&self) -> ListView {
        view::render_employees(&self.employees.items)
    }

    pub fn task_view(&self) -> ListView {
        view::render_tasks(&self.tasks.items, &self.employees.items)
    }

    // ========================
    // Notifications
    // ========================

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.next_seq += 1;
        self.notification = Some(Notification {
            kind,
            message: message.into(),
            seq: self.next_seq,
        });
    }

    /// Hide the notification if it is still the one numbered `seq`
    pub fn dismiss_notification(&mut self, seq: u64) {
        if self.notification.as_ref().is_some_and(|n| n.seq == seq) {
            self.notification = None;
        }
    }

    // ========================
    // Loading
    // ========================

    /// Replace the collection wholesale, or keep it and report the failure
    pub fn apply_list<R: Managed>(&mut self, result: Result<Vec<R>, ClientError>) -> bool {
        let kind = R::KIND;
        match result {
            Ok(items) => {
                log!("[APP] Loaded {} {}", items.len(), kind.plural());
                R::slot_mut(self).items = items;
                if kind == ResourceKind::Employees {
                    self.assignment_options = view::assignment_options(&self.employees.items);
                }
                true
            }
            Err(e) => {
                error!("[APP] Error loading {}: {}", kind.plural(), e);
                self.notify(NotificationKind::Error, format!("Failed to load {}", kind.plural()));
                false
            }
        }
    }

    // ========================
    // Form lifecycle
    // ========================

    pub fn open_add<R: Managed>(&mut self) {
        R::slot_mut(self).form.open_blank();
    }

    /// Pre-fill from the last loaded snapshot. Unknown ids are ignored.
    pub fn open_edit<R: Managed>(&mut self, id: &str) -> bool {
        let slot = R::slot_mut(self);
        match slot.items.iter().find(|r| r.id() == id).cloned() {
            Some(record) => {
                slot.form.open_record(&record);
                if R::KIND == ResourceKind::Tasks {
                    self.drop_unknown_assignee();
                }
                true
            }
            None => false,
        }
    }

    /// An assignee missing from the employee list reads as unassigned, so the
    /// select and the saved payload agree.
    fn drop_unknown_assignee(&mut self) {
        let draft = &mut self.tasks.form.draft;
        if draft.employee_id.is_empty() {
            return;
        }
        if !self.employees.items.iter().any(|e| e.id == draft.employee_id) {
            warn!("[APP] Task assignee {} not in employee list, clearing", draft.employee_id);
            draft.employee_id.clear();
        }
    }

    pub fn cancel_form<R: Managed>(&mut self) {
        R::slot_mut(self).form.close();
    }

    /// Mutate field values of the open form
    pub fn edit_draft<R: Managed>(&mut self, f: impl FnOnce(&mut R::Draft)) {
        f(&mut R::slot_mut(self).form.draft);
    }

    // ========================
    // Save
    // ========================

    /// Build the request for the open form and mark it in flight.
    /// `None` when nothing should be sent.
    pub fn begin_submit<R: Managed>(&mut self) -> Option<Submission<R::Payload>> {
        let slot = R::slot_mut(self);
        if !slot.form.is_open() {
            return None;
        }
        if slot.in_flight {
            warn!("[APP] Ignoring {} submit while a request is in flight", R::KIND.singular());
            return None;
        }
        match slot.form.submission() {
            Ok(submission) => {
                slot.in_flight = true;
                Some(submission)
            }
            Err(e) => {
                self.notify(NotificationKind::Error, e.to_string());
                None
            }
        }
    }

    /// Returns whether the collection should be reloaded
    pub fn finish_submit<R: Managed>(&mut self, updated: bool, result: Result<(), ClientError>) -> bool {
        let kind = R::KIND;
        R::slot_mut(self).in_flight = false;
        match result {
            Ok(()) => {
                let verb = if updated { "updated" } else { "created" };
                self.notify(NotificationKind::Success, format!("{} {} successfully", kind.noun(), verb));
                R::slot_mut(self).form.close();
                true
            }
            Err(e) => {
                error!("[APP] Error saving {}: {}", kind.singular(), e);
                self.notify(NotificationKind::Error, format!("Failed to save {}", kind.singular()));
                false
            }
        }
    }

    // ========================
    // Delete
    // ========================

    /// First step of a delete: ask the user before anything is sent
    pub fn request_delete<R: Managed>(&mut self, id: &str) -> bool {
        let slot = R::slot_mut(self);
        if slot.items.iter().any(|r| r.id() == id) {
            slot.pending_delete = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn cancel_delete<R: Managed>(&mut self) {
        R::slot_mut(self).pending_delete = None;
    }

    /// Take the confirmed id and mark it in flight
    pub fn begin_delete<R: Managed>(&mut self) -> Option<String> {
        let slot = R::slot_mut(self);
        if slot.in_flight {
            warn!("[APP] Ignoring {} delete while a request is in flight", R::KIND.singular());
            return None;
        }
        let id = slot.pending_delete.take()?;
        slot.in_flight = true;
        Some(id)
    }

    /// Returns whether the collection should be reloaded
    pub fn finish_delete<R: Managed>(&mut self, result: Result<(), ClientError>) -> bool {
        let kind = R::KIND;
        R::slot_mut(self).in_flight = false;
        match result {
            Ok(()) => {
                self.notify(NotificationKind::Success, format!("{} deleted successfully", kind.noun()));
                true
            }
            Err(e) => {
                error!("[APP] Error deleting {}: {}", kind.singular(), e);
                self.notify(NotificationKind::Error, format!("Failed to delete {}", kind.singular()));
                false
            }
        }
    }
}

// ========================
// Async drivers
// ========================

/// Short-lived mutable access to a controller
pub trait ControllerCell {
    /// `None` when the controller is gone
    fn with_mut<U>(&self, f: impl FnOnce(&mut AppController) -> U) -> Option<U>;
}

impl ControllerCell for RefCell<AppController> {
    fn with_mut<U>(&self, f: impl FnOnce(&mut AppController) -> U) -> Option<U> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Fetch the collection and replace the in-memory copy
pub async fn refresh<R: Managed, C: ControllerCell, T: Transport>(cell: &C, client: &RestClient<T>) {
    let result = client.list::<R>().await;
    cell.with_mut(|c| c.apply_list(result));
}

/// Open a blank form. The task form also needs a fresh assignee list.
pub async fn open_add<R: Managed, C: ControllerCell, T: Transport>(cell: &C, client: &RestClient<T>) {
    cell.with_mut(|c| c.open_add::<R>());
    if R::KIND == ResourceKind::Tasks {
        refresh::<Employee, _, _>(cell, client).await;
    }
}

/// Create or update from the open form, then reload on success
pub async fn submit<R: Managed, C: ControllerCell, T: Transport>(cell: &C, client: &RestClient<T>) {
    let Some(Some(submission)) = cell.with_mut(|c| c.begin_submit::<R>()) else {
        return;
    };

    let updated = submission.id.is_some();
    let result = match &submission.id {
        Some(id) => client.update::<R>(id, &submission.payload).await,
        None => client.create::<R>(&submission.payload).await,
    };

    if cell.with_mut(|c| c.finish_submit::<R>(updated, result)) == Some(true) {
        refresh::<R, _, _>(cell, client).await;
    }
}

/// Delete the record awaiting confirmation, then reload on success
pub async fn confirm_delete<R: Managed, C: ControllerCell, T: Transport>(cell: &C, client: &RestClient<T>) {
    let Some(Some(id)) = cell.with_mut(|c| c.begin_delete::<R>()) else {
        return;
    };

    let result = client.remove::<R>(&id).await;

    if cell.with_mut(|c| c.finish_delete::<R>(result)) == Some(true) {
        refresh::<R, _, _>(cell, client).await;
    }
}
