//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{FetchTransport, RestClient};
use crate::controller::{self, AppController, ControllerCell, Managed};

pub type ApiClient = RestClient<FetchTransport>;

impl ControllerCell for RwSignal<AppController> {
    fn with_mut<U>(&self, f: impl FnOnce(&mut AppController) -> U) -> Option<U> {
        self.try_update(f)
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The single controller instance
    pub controller: RwSignal<AppController>,
    client: StoredValue<ApiClient>,
}

impl AppContext {
    pub fn new(controller: RwSignal<AppController>, client: ApiClient) -> Self {
        Self {
            controller,
            client: StoredValue::new(client),
        }
    }

    /// Reload a collection from the service
    pub fn refresh<R: Managed>(&self) {
        let controller = self.controller;
        let client = self.client.get_value();
        spawn_local(async move {
            controller::refresh::<R, _, _>(&controller, &client).await;
        });
    }

    pub fn open_add<R: Managed>(&self) {
        let controller = self.controller;
        let client = self.client.get_value();
        spawn_local(async move {
            controller::open_add::<R, _, _>(&controller, &client).await;
        });
    }

    pub fn submit<R: Managed>(&self) {
        let controller = self.controller;
        let client = self.client.get_value();
        spawn_local(async move {
            controller::submit::<R, _, _>(&controller, &client).await;
        });
    }

    pub fn confirm_delete<R: Managed>(&self) {
        let controller = self.controller;
        let client = self.client.get_value();
        spawn_local(async move {
            controller::confirm_delete::<R, _, _>(&controller, &client).await;
        });
    }

    pub fn open_edit<R: Managed>(&self, id: &str) {
        self.controller.update(|c| {
            c.open_edit::<R>(id);
        });
    }

    pub fn cancel_form<R: Managed>(&self) {
        self.controller.update(|c| c.cancel_form::<R>());
    }

    pub fn request_delete<R: Managed>(&self, id: &str) {
        self.controller.update(|c| {
            c.request_delete::<R>(id);
        });
    }

    pub fn cancel_delete<R: Managed>(&self) {
        self.controller.update(|c| c.cancel_delete::<R>());
    }

    /// Write a form field
    pub fn edit_draft<R: Managed>(&self, f: impl FnOnce(&mut R::Draft)) {
        self.controller.update(|c| c.edit_draft::<R>(f));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
