use super::*;
use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::executor::block_on;

use crate::net::identity::{AuthConfig, CurrentUser, IdentityProvider, Session};
use crate::router::intent::MemoryIntentStore;
use crate::router::routes::app_routes;
use crate::router::table::RouteDef;
use crate::state::notifications::Notification;
use crate::state::session::SessionGateway;

// =============================================================
// Fixtures
// =============================================================

struct FixedGuard(Result<bool, AuthError>);

#[async_trait(?Send)]
impl AuthGuard for FixedGuard {
    async fn check(&self) -> Result<bool, AuthError> {
        self.0.clone()
    }
}

/// Pending for the given number of polls, then ready.
struct Yield(u32);

impl Future for Yield {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            return Poll::Ready(());
        }
        self.0 -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Signed in, but the first check answers only after later ones.
#[derive(Default)]
struct SlowFirstGuard {
    calls: Cell<u32>,
}

#[async_trait(?Send)]
impl AuthGuard for SlowFirstGuard {
    async fn check(&self) -> Result<bool, AuthError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if call == 1 {
            Yield(5).await;
        }
        Ok(true)
    }
}

#[derive(Default)]
struct Recorder(RefCell<Vec<Notification>>);

impl Notifier for Recorder {
    fn notify(&self, notification: Notification) {
        self.0.borrow_mut().push(notification);
    }
}

const ALL_VIEWS: [ViewId; 10] = [
    ViewId::Login,
    ViewId::Layout,
    ViewId::Dashboard,
    ViewId::Users,
    ViewId::UserDetail,
    ViewId::Drivers,
    ViewId::DriverDetail,
    ViewId::Pickups,
    ViewId::PickupDetail,
    ViewId::NotFound,
];

fn registry() -> ViewRegistry<&'static str> {
    let mut registry = ViewRegistry::new();
    for view in ALL_VIEWS {
        registry.register_ready(view, view.name());
    }
    registry
}

struct Harness {
    nav: Navigator<&'static str>,
    intents: Rc<MemoryIntentStore>,
    notes: Rc<Recorder>,
    states: Rc<RefCell<Vec<NavState>>>,
}

fn harness_with(guard: Rc<dyn AuthGuard>, registry: ViewRegistry<&'static str>) -> Harness {
    let intents = Rc::new(MemoryIntentStore::default());
    let notes = Rc::new(Recorder::default());
    let nav = Navigator::new(app_routes(), registry, guard, intents.clone(), notes.clone());
    let states = Rc::new(RefCell::new(Vec::new()));
    let sink = states.clone();
    nav.set_on_transition(move |s| sink.borrow_mut().push(s.clone()));
    Harness { nav, intents, notes, states }
}

fn harness(authenticated: bool) -> Harness {
    harness_with(Rc::new(FixedGuard(Ok(authenticated))), registry())
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn guard_decision_table() {
    assert_eq!(guard_decision(Access::Protected, false), GuardDecision::RedirectToLogin);
    assert_eq!(guard_decision(Access::Protected, true), GuardDecision::Allow);
    assert_eq!(guard_decision(Access::GuestOnly, true), GuardDecision::RedirectToDefault);
    assert_eq!(guard_decision(Access::GuestOnly, false), GuardDecision::Allow);
}

// =============================================================
// Navigation cycles
// =============================================================

#[test]
fn authenticated_visit_mounts_layout_chain() {
    let h = harness(true);
    let mounted = block_on(h.nav.navigate("/users/42")).unwrap();
    assert_eq!(mounted.views, vec!["layout", "user-detail"]);
    assert_eq!(mounted.route.param("id"), Some("42"));
    assert_eq!(h.nav.state(), NavState::Mounted(ViewId::UserDetail));
    assert_eq!(
        *h.states.borrow(),
        vec![
            NavState::Resolving("/users/42".to_owned()),
            NavState::Guarding("/users/42".to_owned()),
            NavState::Loading(ViewId::Layout),
            NavState::Loading(ViewId::UserDetail),
            NavState::Mounted(ViewId::UserDetail),
        ]
    );
}

#[test]
fn unauthenticated_protected_visit_redirects_and_records_intent() {
    let h = harness(false);
    let mounted = block_on(h.nav.navigate("/drivers?page=2")).unwrap();
    assert_eq!(mounted.route.leaf(), ViewId::Login);
    assert_eq!(mounted.route.path, LOGIN_PATH);
    assert_eq!(h.intents.peek().as_deref(), Some("/drivers?page=2"));
    assert!(h.states.borrow().contains(&NavState::Redirecting(LOGIN_PATH.to_owned())));
}

#[test]
fn login_while_authenticated_redirects_home() {
    let h = harness(true);
    let mounted = block_on(h.nav.navigate("/login")).unwrap();
    assert_eq!(mounted.route.leaf(), ViewId::Dashboard);
    assert_eq!(mounted.route.path, DEFAULT_PATH);
    assert_eq!(h.intents.peek(), None);
}

#[test]
fn login_while_signed_out_is_allowed() {
    let h = harness(false);
    let mounted = block_on(h.nav.navigate("/login")).unwrap();
    assert_eq!(mounted.views, vec!["login"]);
    assert_eq!(h.intents.peek(), None);
}

#[test]
fn guard_error_fails_closed() {
    let h = harness_with(Rc::new(FixedGuard(Err(AuthError::Unknown("offline".to_owned())))), registry());
    let mounted = block_on(h.nav.navigate("/pickups")).unwrap();
    assert_eq!(mounted.route.leaf(), ViewId::Login);
    assert_eq!(h.intents.peek().as_deref(), Some("/pickups"));
}

#[test]
fn unknown_path_mounts_not_found() {
    let h = harness(true);
    let mounted = block_on(h.nav.navigate("/does/not/exist")).unwrap();
    assert_eq!(mounted.route.leaf(), ViewId::NotFound);
}

#[test]
fn redirect_loop_is_bounded() {
    let table = RouteTable::new(vec![
        RouteDef::new("/login", ViewId::Login).protected(),
        RouteDef::new("*", ViewId::NotFound),
    ]);
    let intents = Rc::new(MemoryIntentStore::default());
    let nav = Navigator::new(table, registry(), Rc::new(FixedGuard(Ok(false))), intents, Rc::new(Recorder::default()));
    assert_eq!(block_on(nav.navigate("/x")), Err(NavError::RedirectLoop("/x".to_owned())));
    assert_eq!(nav.state(), NavState::Idle);
}

#[test]
fn empty_table_reports_no_route() {
    let nav = Navigator::new(
        RouteTable::new(Vec::new()),
        registry(),
        Rc::new(FixedGuard(Ok(true))),
        Rc::new(MemoryIntentStore::default()),
        Rc::new(Recorder::default()),
    );
    assert_eq!(block_on(nav.navigate("/")), Err(NavError::NoRoute("/".to_owned())));
}

#[test]
fn view_load_failure_keeps_previous_view_and_notifies() {
    let mut registry = registry();
    registry.register(ViewId::Pickups, || async { Err("chunk failed".to_owned()) }.boxed_local());
    let h = harness_with(Rc::new(FixedGuard(Ok(true))), registry);

    block_on(h.nav.navigate("/users")).unwrap();
    let err = block_on(h.nav.navigate("/pickups")).unwrap_err();

    assert!(matches!(err, NavError::ViewLoad(ViewLoadError::Failed { view: ViewId::Pickups, .. })));
    assert_eq!(h.nav.state(), NavState::Mounted(ViewId::Users));
    assert_eq!(h.nav.current().map(|r| r.leaf()), Some(ViewId::Users));
    let notes = h.notes.0.borrow();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].message.contains("chunk failed"));
}

#[test]
fn newer_navigation_wins_over_slower_older_one() {
    let h = harness_with(Rc::new(SlowFirstGuard::default()), registry());

    let (first, second) = block_on(async { futures::join!(h.nav.navigate("/users"), h.nav.navigate("/drivers")) });

    assert_eq!(first, Err(NavError::Superseded("/users".to_owned())));
    assert_eq!(second.map(|m| m.route.path), Ok("/drivers".to_owned()));
    assert_eq!(h.nav.current().map(|r| r.path), Some("/drivers".to_owned()));
    assert_eq!(h.nav.state(), NavState::Mounted(ViewId::Drivers));
    assert_eq!(h.states.borrow().last(), Some(&NavState::Mounted(ViewId::Drivers)));
}

#[test]
fn sequential_navigations_are_not_superseded() {
    let h = harness(true);
    block_on(h.nav.navigate("/users")).unwrap();
    let second = block_on(h.nav.navigate("/pickups")).unwrap();
    assert_eq!(second.route.leaf(), ViewId::Pickups);
}

// =============================================================
// Post sign-in
// =============================================================

#[test]
fn post_sign_in_target_consumes_intent_once() {
    let h = harness(true);
    h.intents.store("/users/7");
    assert_eq!(h.nav.post_sign_in_target(), "/users/7");
    assert_eq!(h.nav.post_sign_in_target(), DEFAULT_PATH);
}

#[test]
fn post_sign_in_ignores_login_intent() {
    let h = harness(true);
    h.intents.store(LOGIN_PATH);
    assert_eq!(h.nav.post_sign_in_target(), DEFAULT_PATH);
}

// =============================================================
// End to end with the session gateway
// =============================================================

#[derive(Default)]
struct StubProvider {
    signed_in: Cell<bool>,
}

#[async_trait(?Send)]
impl IdentityProvider for StubProvider {
    fn configure(&self, _config: &AuthConfig) -> Result<(), AuthError> {
        Ok(())
    }

    async fn sign_in(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username == "admin" && password == "secret" {
            self.signed_in.set(true);
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.signed_in.set(false);
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<CurrentUser>, AuthError> {
        Ok(self.signed_in.get().then(|| CurrentUser { username: "admin".to_owned(), user_id: None }))
    }

    async fn fetch_session(&self) -> Result<Session, AuthError> {
        if !self.signed_in.get() {
            return Err(AuthError::NoSession);
        }
        Ok(Session {
            id_token: "id".to_owned(),
            access_token: "access".to_owned(),
            refresh_token: None,
            expires_at_ms: None,
        })
    }
}

#[test]
fn deep_link_survives_sign_in() {
    let gateway = Rc::new(SessionGateway::new(Rc::new(StubProvider::default())));
    gateway.configure(&AuthConfig::default()).unwrap();
    let h = harness_with(gateway.clone(), registry());

    let first = block_on(h.nav.navigate("/users/42")).unwrap();
    assert_eq!(first.route.leaf(), ViewId::Login);
    assert_eq!(h.intents.peek().as_deref(), Some("/users/42"));

    assert_eq!(block_on(gateway.sign_in("admin", "wrong")), Err(AuthError::InvalidCredentials));
    block_on(gateway.sign_in("admin", "secret")).unwrap();

    let target = h.nav.post_sign_in_target();
    let landed = block_on(h.nav.navigate(&target)).unwrap();
    assert_eq!(landed.route.path, "/users/42");
    assert_eq!(landed.route.leaf(), ViewId::UserDetail);
    assert_eq!(h.intents.peek(), None);
    assert_eq!(h.nav.post_sign_in_target(), DEFAULT_PATH);
}
