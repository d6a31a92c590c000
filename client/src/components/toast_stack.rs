//! Stack of transient notifications.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let n = toast.notification;
                        view! {
                            <div class=format!("toast toast--{}", n.severity.variant()) role="alert">
                                <i class=format!("icon icon--{}", n.icon)></i>
                                <span class="toast__message">{n.message}</span>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| toasts.update(|s| s.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
