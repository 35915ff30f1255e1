//! Record List Component
//!
//! Draws a [`ListView`] as cards with edit/delete actions.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::view::{Card, CardLine, ListView};

#[component]
pub fn RecordList(
    #[prop(into)] list: Signal<ListView>,
    /// Id of the card showing the delete confirmation
    #[prop(into)] pending_delete: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_edit: Callback<String>,
    #[prop(into)] on_request_delete: Callback<String>,
    #[prop(into)] on_confirm_delete: Callback<()>,
    #[prop(into)] on_cancel_delete: Callback<()>,
) -> impl IntoView {
    move || match list.get() {
        ListView::Empty(placeholder) => view! {
            <div class="empty-state">
                <h3>{placeholder.heading}</h3>
                <p>{placeholder.hint}</p>
            </div>
        }
        .into_any(),
        ListView::Cards(cards) => cards
            .into_iter()
            .map(|card| {
                card_view(card, pending_delete, busy, on_edit, on_request_delete, on_confirm_delete, on_cancel_delete)
            })
            .collect_view()
            .into_any(),
    }
}

fn card_view(
    card: Card,
    pending_delete: Signal<Option<String>>,
    busy: Signal<bool>,
    on_edit: Callback<String>,
    on_request_delete: Callback<String>,
    on_confirm_delete: Callback<()>,
    on_cancel_delete: Callback<()>,
) -> impl IntoView {
    let id = card.id.clone();
    let edit_id = card.id.clone();
    let delete_id = card.id;
    let confirming = Signal::derive(move || pending_delete.get().as_deref() == Some(id.as_str()));

    view! {
        <div class="card">
            <div class="card-header">
                <div>
                    <div class="card-title">{card.title}</div>
                    {card.subtitle.map(|subtitle| view! { <div class="card-subtitle">{subtitle}</div> })}
                </div>
                <span class=format!("badge {}", card.badge.class)>{card.badge.label}</span>
            </div>
            <div class="card-body">
                <div class="card-info">
                    {card.lines.into_iter().map(line_view).collect_view()}
                </div>
            </div>
            <div class="card-actions">
                <button class="btn btn-edit" on:click=move |_| on_edit.run(edit_id.clone())>
                    "Edit"
                </button>
                <DeleteConfirmButton
                    confirming=confirming
                    on_request=move || on_request_delete.run(delete_id.clone())
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                    disabled=busy
                />
            </div>
        </div>
    }
}

fn line_view(line: CardLine) -> AnyView {
    match line {
        CardLine::Info { label, value } => view! {
            <div class="info-item">
                <span class="info-label">{label}</span>
                <span>{value}</span>
            </div>
        }
        .into_any(),
        CardLine::Tag(badge) => view! {
            <div class="info-item">
                <span class=format!("badge {}", badge.class)>{badge.label}</span>
            </div>
        }
        .into_any(),
    }
}
