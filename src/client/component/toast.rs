use dioxus::prelude::*;

use crate::client::model::notification::Notification;

#[cfg(feature = "web")]
use crate::client::constant::TOAST_DURATION_MS;

/// Renders the notifications pushed by the `Notifier` sink.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_context::<Signal<Vec<Notification>>>();

    rsx!(
        div {
            class: "toast toast-end z-50",
            for notification in toasts() {
                Toast { key: "{notification.id}", notification }
            }
        }
    )
}

#[component]
fn Toast(notification: Notification) -> Element {
    let mut toasts = use_context::<Signal<Vec<Notification>>>();
    let id = notification.id;

    #[cfg(feature = "web")]
    use_future(move || async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.write().retain(|t| t.id != id);
    });

    let class = if notification.is_error() {
        "alert-error"
    } else {
        "alert-success"
    };

    rsx!(
        div {
            class: "alert {class} shadow",
            span { "{notification.message}" }
            button {
                class: "btn btn-xs btn-ghost",
                onclick: move |_| toasts.write().retain(|t| t.id != id),
                "✕"
            }
        }
    )
}
