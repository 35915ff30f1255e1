//! Employee Form Component
//!
//! Add/edit form for employees. Field values live in the controller.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Employee;

#[component]
pub fn EmployeeForm() -> impl IntoView {
    let ctx = use_app_context();

    let draft = Memo::new(move |_| ctx.controller.with(|c| c.form::<Employee>().draft.clone()));
    let title = move || ctx.controller.with(|c| c.form::<Employee>().title());
    let editing_id = move || {
        ctx.controller
            .with(|c| c.form::<Employee>().editing_id().map(str::to_string))
    };
    let busy = move || ctx.controller.with(|c| c.is_busy::<Employee>());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit::<Employee>();
    };

    view! {
        <div id="employee-form" class="form-container">
            <h3 id="employee-form-title">{title}</h3>
            <form on:submit=on_submit>
                {move || editing_id().map(|id| view! {
                    <div class="form-group">
                        <label for="employee-id">"ID"</label>
                        <input id="employee-id" type="text" readonly=true prop:value=id />
                    </div>
                })}
                <div class="form-group">
                    <label for="employee-name">"Name *"</label>
                    <input
                        id="employee-name"
                        type="text"
                        required=true
                        prop:value=move || draft.get().name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.edit_draft::<Employee>(|d| d.name = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="employee-email">"Email *"</label>
                    <input
                        id="employee-email"
                        type="email"
                        required=true
                        prop:value=move || draft.get().email
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.edit_draft::<Employee>(|d| d.email = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="employee-position">"Position"</label>
                    <input
                        id="employee-position"
                        type="text"
                        prop:value=move || draft.get().position
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.edit_draft::<Employee>(|d| d.position = value);
                        }
                    />
                </div>
                <div class="form-group checkbox-group">
                    <label>
                        <input
                            id="employee-active"
                            type="checkbox"
                            prop:checked=move || draft.get().is_active
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                ctx.edit_draft::<Employee>(|d| d.is_active = checked);
                            }
                        />
                        " Active"
                    </label>
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=busy>"Save"</button>
                    <button type="button" class="btn btn-secondary" on:click={move |_| ctx.cancel_form::<Employee>()}>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
