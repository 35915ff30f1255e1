//! Staff Board App
//!
//! Root component: owns the controller, loads both collections on mount.

use leptos::logging::error;
use leptos::prelude::*;

use crate::api::{FetchTransport, RestClient};
use crate::components::{EmployeesTab, NotificationToast, TabBar, TasksTab};
use crate::config::{ApiConfig, DEFAULT_API_URL};
use crate::context::AppContext;
use crate::controller::AppController;
use crate::models::{Employee, ResourceKind, Task};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env().unwrap_or_else(|e| {
        error!("[APP] {}; falling back to {}", e, DEFAULT_API_URL);
        ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
        }
    });

    // State
    let controller = RwSignal::new(AppController::new());
    let (active_tab, set_active_tab) = signal(ResourceKind::Employees);

    let ctx = AppContext::new(controller, RestClient::new(FetchTransport::new(&config)));
    provide_context(ctx);

    // Initial load of both collections
    Effect::new(move |_| {
        ctx.refresh::<Employee>();
        ctx.refresh::<Task>();
    });

    view! {
        <div class="container">
            <header>
                <h1>"Employee & Task Management"</h1>
            </header>

            <TabBar active_tab=active_tab set_active_tab=set_active_tab />

            {move || match active_tab.get() {
                ResourceKind::Employees => view! { <EmployeesTab /> }.into_any(),
                ResourceKind::Tasks => view! { <TasksTab /> }.into_any(),
            }}

            <NotificationToast />
        </div>
    }
}
