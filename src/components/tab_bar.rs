//! Tab Bar Component
//!
//! Switches between the employee and task lists. Opening a tab reloads
//! its collection.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Employee, ResourceKind, Task};

const TABS: [(ResourceKind, &str); 2] = [
    (ResourceKind::Employees, "Employees"),
    (ResourceKind::Tasks, "Tasks"),
];

#[component]
pub fn TabBar(
    active_tab: ReadSignal<ResourceKind>,
    set_active_tab: WriteSignal<ResourceKind>,
) -> impl IntoView {
    let ctx = use_app_context();

    let switch_to = move |kind: ResourceKind| {
        set_active_tab.set(kind);
        match kind {
            ResourceKind::Employees => ctx.refresh::<Employee>(),
            ResourceKind::Tasks => ctx.refresh::<Task>(),
        }
    };

    view! {
        <div class="tabs">
            {TABS.iter().map(|&(kind, label)| {
                let tab_class = move || {
                    if active_tab.get() == kind { "tab-btn active" } else { "tab-btn" }
                };
                view! {
                    <button class=tab_class on:click=move |_| switch_to(kind)>
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
