use super::*;
use std::cell::RefCell;

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_icons_match_variant() {
    assert_eq!(Severity::Success.icon(), "check2-circle");
    assert_eq!(Severity::Danger.icon(), "exclamation-octagon");
    assert_eq!(Severity::Warning.icon(), "exclamation-triangle");
    assert_eq!(Severity::Primary.icon(), "info-circle");
    assert_eq!(Severity::Danger.variant(), "danger");
}

#[test]
fn notification_defaults_to_three_seconds() {
    let n = Notification::new("User deleted", Severity::Success);
    assert_eq!(n.duration_ms, 3000);
    assert_eq!(n.icon, "check2-circle");
}

// =============================================================
// Toast stack
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotificationsState::default();
    let a = state.push(Notification::new("a", Severity::Primary));
    let b = state.push(Notification::new("b", Severity::Danger));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = NotificationsState::default();
    let a = state.push(Notification::new("a", Severity::Primary));
    let b = state.push(Notification::new("b", Severity::Primary));
    state.dismiss(a);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

// =============================================================
// Notifier helpers
// =============================================================

#[derive(Default)]
struct Recorder(RefCell<Vec<Notification>>);

impl Notifier for Recorder {
    fn notify(&self, notification: Notification) {
        self.0.borrow_mut().push(notification);
    }
}

#[test]
fn helpers_pick_severity() {
    let recorder = Recorder::default();
    recorder.success("ok");
    recorder.error("bad");
    recorder.info("fyi");
    let severities: Vec<_> = recorder.0.borrow().iter().map(|n| n.severity).collect();
    assert_eq!(severities, vec![Severity::Success, Severity::Danger, Severity::Primary]);
}
