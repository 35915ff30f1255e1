//! Notification Toast Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::NOTIFICATION_MS;
use crate::context::use_app_context;

/// Shows the controller's current notification and hides it after a delay
#[component]
pub fn NotificationToast() -> impl IntoView {
    let ctx = use_app_context();
    let current = Memo::new(move |_| ctx.controller.with(|c| c.notification().cloned()));

    Effect::new(move |_| {
        if let Some(note) = current.get() {
            let controller = ctx.controller;
            let seq = note.seq;
            spawn_local(async move {
                TimeoutFuture::new(NOTIFICATION_MS).await;
                let _ = controller.try_update(|c| c.dismiss_notification(seq));
            });
        }
    });

    let class = move || current.get().map(|n| n.css_class()).unwrap_or("notification");
    let message = move || current.get().map(|n| n.message).unwrap_or_default();

    view! {
        <div id="notification" class=class>{message}</div>
    }
}
