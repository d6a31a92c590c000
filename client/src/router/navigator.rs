//! Navigation state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation (link click, programmatic redirect, initial load) runs one
//! cycle: resolve the path, ask the guard, redirect or load the view chain,
//! then mount. Each state change is published through `on_transition` so the
//! app shell can show a loader while guarding and loading.
//!
//! STATES
//! ======
//! `Idle -> Resolving -> Guarding -> Loading -> Mounted`, with
//! `Guarding -> Redirecting -> Resolving` starting a fresh cycle. Guard errors
//! count as unauthenticated. A cycle stops after `MAX_REDIRECTS` redirects.
//!
//! Only the latest navigation may publish state or mount. Each cycle takes a
//! sequence number; a cycle that resumes from an await after a newer one
//! started returns `Superseded` without touching state.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use super::intent::IntentStore;
use super::registry::{ViewLoadError, ViewRegistry};
use super::routes::ViewId;
use super::table::{Access, RouteMatch, RouteTable};
use crate::net::identity::AuthError;
use crate::state::notifications::Notifier;

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_PATH: &str = "/";
pub const MAX_REDIRECTS: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    Idle,
    Resolving(String),
    Guarding(String),
    Loading(ViewId),
    Mounted(ViewId),
    Redirecting(String),
}

impl NavState {
    /// Whether a navigation is still in progress.
    pub fn is_busy(&self) -> bool {
        !matches!(self, Self::Idle | Self::Mounted(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("too many redirects starting from {0}")]
    RedirectLoop(String),
    #[error("no route matches {0}")]
    NoRoute(String),
    #[error(transparent)]
    ViewLoad(#[from] ViewLoadError),
    #[error("navigation to {0} superseded by a newer one")]
    Superseded(String),
}

/// Reports whether someone is signed in.
#[async_trait(?Send)]
pub trait AuthGuard {
    async fn check(&self) -> Result<bool, AuthError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToDefault,
}

pub fn guard_decision(access: Access, authenticated: bool) -> GuardDecision {
    match (access, authenticated) {
        (Access::Protected, false) => GuardDecision::RedirectToLogin,
        (Access::GuestOnly, true) => GuardDecision::RedirectToDefault,
        _ => GuardDecision::Allow,
    }
}

/// A completed navigation: the route and its loaded view chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Mounted<V> {
    pub route: RouteMatch,
    /// Outermost layout first, leaf view last.
    pub views: Vec<V>,
}

type TransitionFn = Box<dyn Fn(&NavState)>;

pub struct Navigator<V> {
    table: RouteTable,
    registry: ViewRegistry<V>,
    guard: Rc<dyn AuthGuard>,
    intents: Rc<dyn IntentStore>,
    notifier: Rc<dyn Notifier>,
    state: RefCell<NavState>,
    current: RefCell<Option<RouteMatch>>,
    on_transition: RefCell<Option<TransitionFn>>,
    sequence: Cell<u64>,
}

impl<V: Clone + 'static> Navigator<V> {
    pub fn new(
        table: RouteTable,
        registry: ViewRegistry<V>,
        guard: Rc<dyn AuthGuard>,
        intents: Rc<dyn IntentStore>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            table,
            registry,
            guard,
            intents,
            notifier,
            state: RefCell::new(NavState::Idle),
            current: RefCell::new(None),
            on_transition: RefCell::new(None),
            sequence: Cell::new(0),
        }
    }

    pub fn set_on_transition(&self, callback: impl Fn(&NavState) + 'static) {
        *self.on_transition.borrow_mut() = Some(Box::new(callback));
    }

    pub fn state(&self) -> NavState {
        self.state.borrow().clone()
    }

    /// The last successfully mounted route.
    pub fn current(&self) -> Option<RouteMatch> {
        self.current.borrow().clone()
    }

    fn is_superseded(&self, ticket: u64) -> bool {
        self.sequence.get() != ticket
    }

    fn transition(&self, next: NavState) {
        log::debug!("nav: {next:?}");
        *self.state.borrow_mut() = next.clone();
        if let Some(callback) = self.on_transition.borrow().as_ref() {
            callback(&next);
        }
    }

    async fn is_authenticated(&self) -> bool {
        match self.guard.check().await {
            Ok(authenticated) => authenticated,
            Err(e) => {
                log::warn!("auth guard failed, treating as signed out: {e}");
                false
            }
        }
    }

    /// Run a full navigation cycle for `path`, following redirects.
    ///
    /// # Errors
    ///
    /// `RedirectLoop` after too many redirects, `NoRoute` when nothing
    /// matches, and `ViewLoad` when a view in the chain fails to load. On a
    /// load failure the previously mounted view stays in place. `Superseded`
    /// when another navigation started while this one was waiting.
    pub async fn navigate(&self, path: &str) -> Result<Mounted<V>, NavError> {
        let ticket = self.sequence.get() + 1;
        self.sequence.set(ticket);
        let mut target = path.to_owned();
        for _ in 0..=MAX_REDIRECTS {
            self.transition(NavState::Resolving(target.clone()));
            let Some(route) = self.table.resolve(&target) else {
                self.settle();
                return Err(NavError::NoRoute(target));
            };

            self.transition(NavState::Guarding(target.clone()));
            let authenticated = self.is_authenticated().await;
            if self.is_superseded(ticket) {
                log::debug!("nav: dropping stale cycle for {path}");
                return Err(NavError::Superseded(path.to_owned()));
            }
            match guard_decision(route.access, authenticated) {
                GuardDecision::RedirectToLogin => {
                    self.intents.store(&target);
                    LOGIN_PATH.clone_into(&mut target);
                    self.transition(NavState::Redirecting(target.clone()));
                    continue;
                }
                GuardDecision::RedirectToDefault => {
                    DEFAULT_PATH.clone_into(&mut target);
                    self.transition(NavState::Redirecting(target.clone()));
                    continue;
                }
                GuardDecision::Allow => {}
            }

            let mut views = Vec::with_capacity(route.chain.len());
            for view in &route.chain {
                self.transition(NavState::Loading(*view));
                let loaded = self.registry.load(*view).await;
                if self.is_superseded(ticket) {
                    log::debug!("nav: dropping stale cycle for {path}");
                    return Err(NavError::Superseded(path.to_owned()));
                }
                match loaded {
                    Ok(loaded) => views.push(loaded),
                    Err(e) => {
                        log::error!("navigation to {target} aborted: {e}");
                        self.notifier.error(&format!("Failed to load page: {e}"));
                        self.settle();
                        return Err(e.into());
                    }
                }
            }

            self.transition(NavState::Mounted(route.leaf()));
            *self.current.borrow_mut() = Some(route.clone());
            return Ok(Mounted { route, views });
        }

        log::error!("redirect loop navigating to {path}");
        self.settle();
        Err(NavError::RedirectLoop(path.to_owned()))
    }

    /// Return to the previously mounted view, or idle if there is none.
    fn settle(&self) {
        let previous = self.current.borrow().as_ref().map(RouteMatch::leaf);
        self.transition(previous.map_or(NavState::Idle, NavState::Mounted));
    }

    /// Where to go after sign-in: the stored intent (consumed) or the default route.
    pub fn post_sign_in_target(&self) -> String {
        self.intents
            .take()
            .filter(|path| path != LOGIN_PATH)
            .unwrap_or_else(|| DEFAULT_PATH.to_owned())
    }
}
