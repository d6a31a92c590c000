//! Toast notifications.
//!
//! DESIGN
//! ======
//! Producers talk to the `Notifier` trait so grids, forms, and the navigator
//! can be tested with a recording notifier. The browser implementation pushes
//! into a `NotificationsState` signal rendered by the toast stack, and each
//! toast removes itself after its duration.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

/// Default time a toast stays on screen.
pub const DEFAULT_DURATION_MS: u32 = 3000;

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Primary,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Primary => "info-circle",
            Self::Success => "check2-circle",
            Self::Warning => "exclamation-triangle",
            Self::Danger => "exclamation-octagon",
        }
    }

    pub fn variant(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub icon: &'static str,
    pub duration_ms: u32,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            icon: severity.icon(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// Sink for user-facing messages.
pub trait Notifier {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification::new(message, Severity::Success));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::new(message, Severity::Danger));
    }

    fn info(&self, message: &str) {
        self.notify(Notification::new(message, Severity::Primary));
    }
}

/// A notification currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl NotificationsState {
    /// Append a toast and return its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notification });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Notifier backed by the toast stack signal.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    state: RwSignal<NotificationsState>,
}

impl ToastNotifier {
    pub fn new(state: RwSignal<NotificationsState>) -> Self {
        Self { state }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        if notification.severity == Severity::Danger {
            log::error!("{}", notification.message);
        }
        let duration_ms = notification.duration_ms;
        let mut id = 0;
        self.state.update(|s| id = s.push(notification));

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                state.update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (duration_ms, id);
    }
}
