//! Task Form Component
//!
//! Add/edit form for tasks with status and assignee selectors.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Task, TaskStatus};

#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let draft = Memo::new(move |_| ctx.controller.with(|c| c.form::<Task>().draft.clone()));
    // Regenerated whenever the employee list reloads
    let options = Memo::new(move |_| ctx.controller.with(|c| c.assignment_options().to_vec()));
    let title = move || ctx.controller.with(|c| c.form::<Task>().title());
    let editing_id = move || {
        ctx.controller
            .with(|c| c.form::<Task>().editing_id().map(str::to_string))
    };
    let busy = move || ctx.controller.with(|c| c.is_busy::<Task>());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit::<Task>();
    };

    view! {
        <div id="task-form" class="form-container">
            <h3 id="task-form-title">{title}</h3>
            <form on:submit=on_submit>
                {move || editing_id().map(|id| view! {
                    <div class="form-group">
                        <label for="task-id">"ID"</label>
                        <input id="task-id" type="text" readonly=true prop:value=id />
                    </div>
                })}
                <div class="form-group">
                    <label for="task-title">"Title *"</label>
                    <input
                        id="task-title"
                        type="text"
                        required=true
                        prop:value=move || draft.get().title
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.edit_draft::<Task>(|d| d.title = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="task-description">"Description"</label>
                    <textarea
                        id="task-description"
                        prop:value=move || draft.get().description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.edit_draft::<Task>(|d| d.description = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="task-status">"Status"</label>
                    <select
                        id="task-status"
                        on:change=move |ev| {
                            let status = TaskStatus::from_wire(&event_target_value(&ev));
                            ctx.edit_draft::<Task>(|d| d.status = status);
                        }
                    >
                        {TaskStatus::ALL.iter().map(|&status| view! {
                            <option
                                value=status.as_str()
                                prop:selected=move || draft.get().status == status
                            >
                                {status.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="task-employee">"Assign to"</label>
                    <select
                        id="task-employee"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.edit_draft::<Task>(|d| d.employee_id = value);
                        }
                    >
                        {move || options.get().into_iter().map(|opt| {
                            let value = opt.value.clone();
                            view! {
                                <option
                                    value=opt.value
                                    prop:selected=move || draft.get().employee_id == value
                                >
                                    {opt.label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=busy>"Save"</button>
                    <button type="button" class="btn btn-secondary" on:click={move |_| ctx.cancel_form::<Task>()}>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
