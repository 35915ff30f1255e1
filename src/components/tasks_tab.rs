//! Tasks Tab

use leptos::prelude::*;

use crate::components::{RecordList, TaskForm};
use crate::context::use_app_context;
use crate::models::Task;

#[component]
pub fn TasksTab() -> impl IntoView {
    let ctx = use_app_context();

    let form_open = Memo::new(move |_| ctx.controller.with(|c| c.form::<Task>().is_open()));
    // Assignee names come from the employee collection
    let list = Memo::new(move |_| ctx.controller.with(|c| c.task_view()));
    let pending = Memo::new(move |_| {
        ctx.controller
            .with(|c| c.pending_delete::<Task>().map(str::to_string))
    });
    let busy = Memo::new(move |_| ctx.controller.with(|c| c.is_busy::<Task>()));

    view! {
        <div id="tasks-tab" class="tab-content active">
            <div class="section-header">
                <h2>"Tasks"</h2>
                <button class="btn btn-primary" on:click={move |_| ctx.open_add::<Task>()}>
                    "+ Add Task"
                </button>
            </div>

            <Show when=move || form_open.get()>
                <TaskForm />
            </Show>

            <div id="tasks-list" class="cards-grid">
                <RecordList
                    list=list
                    pending_delete=pending
                    busy=busy
                    on_edit={move |id: String| ctx.open_edit::<Task>(&id)}
                    on_request_delete={move |id: String| ctx.request_delete::<Task>(&id)}
                    on_confirm_delete={move || ctx.confirm_delete::<Task>()}
                    on_cancel_delete={move || ctx.cancel_delete::<Task>()}
                />
            </div>
        </div>
    }
}
