//! Employees Tab
//!
//! Header with the add action, the form when open, and the card list.

use leptos::prelude::*;

use crate::components::{EmployeeForm, RecordList};
use crate::context::use_app_context;
use crate::models::Employee;

#[component]
pub fn EmployeesTab() -> impl IntoView {
    let ctx = use_app_context();

    let form_open = Memo::new(move |_| ctx.controller.with(|c| c.form::<Employee>().is_open()));
    let list = Memo::new(move |_| ctx.controller.with(|c| c.employee_view()));
    let pending = Memo::new(move |_| {
        ctx.controller
            .with(|c| c.pending_delete::<Employee>().map(str::to_string))
    });
    let busy = Memo::new(move |_| ctx.controller.with(|c| c.is_busy::<Employee>()));

    view! {
        <div id="employees-tab" class="tab-content active">
            <div class="section-header">
                <h2>"Employees"</h2>
                <button class="btn btn-primary" on:click={move |_| ctx.open_add::<Employee>()}>
                    "+ Add Employee"
                </button>
            </div>

            <Show when=move || form_open.get()>
                <EmployeeForm />
            </Show>

            <div id="employees-list" class="cards-grid">
                <RecordList
                    list=list
                    pending_delete=pending
                    busy=busy
                    on_edit={move |id: String| ctx.open_edit::<Employee>(&id)}
                    on_request_delete={move |id: String| ctx.request_delete::<Employee>(&id)}
                    on_confirm_delete={move || ctx.confirm_delete::<Employee>()}
                    on_cancel_delete={move || ctx.cancel_delete::<Employee>()}
                />
            </div>
        </div>
    }
}
