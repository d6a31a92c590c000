//! Session gateway wrapping the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigator asks the gateway whether a user is signed in, and the API
//! client asks it for per-request authorization headers. The gateway owns the
//! one cached session and collapses concurrent lookups into a single provider
//! call.
//!
//! CACHE LIFECYCLE
//! ===============
//! The cache is filled by `sign_in` and by the first successful
//! `get_session`, and dropped by `sign_out`, by `is_authenticated`
//! observing a failure, or by `get_session` finding the tokens expired. Every drop bumps `epoch`; a lookup that started under
//! an older epoch still answers its callers but is not cached.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

use crate::net::api::{AuthHeaders, session_headers};
use crate::net::identity::{AuthConfig, AuthError, IdentityProvider, Session, now_ms};
use crate::router::navigator::AuthGuard;

type SessionLookup = Shared<LocalBoxFuture<'static, Result<Session, AuthError>>>;

/// Single owner of the signed-in session for this tab.
pub struct SessionGateway {
    provider: Rc<dyn IdentityProvider>,
    configured: Cell<bool>,
    cached: RefCell<Option<Session>>,
    in_flight: RefCell<Option<SessionLookup>>,
    epoch: Cell<u64>,
}

impl SessionGateway {
    pub fn new(provider: Rc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            configured: Cell::new(false),
            cached: RefCell::new(None),
            in_flight: RefCell::new(None),
            epoch: Cell::new(0),
        }
    }

    /// One-time provider setup.
    ///
    /// # Errors
    ///
    /// `AlreadyConfigured` on a second call; the first configuration stays.
    pub fn configure(&self, config: &AuthConfig) -> Result<(), AuthError> {
        if self.configured.get() {
            return Err(AuthError::AlreadyConfigured);
        }
        self.provider.configure(config)?;
        self.configured.set(true);
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.configured.get()
    }

    fn ensure_configured(&self) -> Result<(), AuthError> {
        if self.configured.get() { Ok(()) } else { Err(AuthError::NotConfigured) }
    }

    fn invalidate(&self) {
        self.cached.borrow_mut().take();
        self.in_flight.borrow_mut().take();
        self.epoch.set(self.epoch.get() + 1);
    }

    /// Authenticate and cache the resulting session.
    ///
    /// # Errors
    ///
    /// Provider failures are passed through as their `AuthError` kind.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        self.ensure_configured()?;
        self.invalidate();
        self.provider.sign_in(username, password).await?;
        let session = self.provider.fetch_session().await?;
        *self.cached.borrow_mut() = Some(session.clone());
        log::info!("signed in as {username}");
        Ok(session)
    }

    /// Sign out. The local cache is cleared even when the provider fails.
    ///
    /// # Errors
    ///
    /// Provider failures are reported as `AuthError::Unknown`.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.invalidate();
        self.ensure_configured()?;
        self.provider.sign_out().await.map_err(AuthError::into_unknown)
    }

    /// Whether a user is currently signed in. Never fails.
    pub async fn is_authenticated(&self) -> bool {
        if self.ensure_configured().is_err() {
            return false;
        }
        match self.provider.current_user().await {
            Ok(Some(_)) => true,
            Ok(None) => {
                self.invalidate();
                false
            }
            Err(e) => {
                log::warn!("auth check failed: {e}");
                self.invalidate();
                false
            }
        }
    }

    /// Cached session, or one provider lookup shared by all concurrent callers.
    ///
    /// # Errors
    ///
    /// `NotConfigured` before setup; otherwise whatever the provider reports.
    pub async fn get_session(&self) -> Result<Session, AuthError> {
        self.ensure_configured()?;
        let cached = self.cached.borrow().clone();
        if let Some(session) = cached {
            if !session.is_expired(now_ms()) {
                return Ok(session);
            }
            log::debug!("cached session expired, refreshing");
            self.invalidate();
        }

        let lookup = self.lookup();
        let started_at = self.epoch.get();
        let result = lookup.clone().await;

        let mut in_flight = self.in_flight.borrow_mut();
        if in_flight.as_ref().is_some_and(|current| current.ptr_eq(&lookup)) {
            in_flight.take();
        }
        drop(in_flight);

        if let Ok(session) = &result {
            if self.epoch.get() == started_at {
                *self.cached.borrow_mut() = Some(session.clone());
            }
        }
        result
    }

    fn lookup(&self) -> SessionLookup {
        let mut in_flight = self.in_flight.borrow_mut();
        if let Some(existing) = in_flight.as_ref() {
            return existing.clone();
        }
        let provider = Rc::clone(&self.provider);
        let lookup = async move { provider.fetch_session().await }.boxed_local().shared();
        *in_flight = Some(lookup.clone());
        lookup
    }

    /// Authorization headers derived from the current session.
    ///
    /// # Errors
    ///
    /// Same as [`SessionGateway::get_session`].
    pub async fn auth_headers(&self) -> Result<Vec<(String, String)>, AuthError> {
        let session = self.get_session().await?;
        Ok(session_headers(&session.id_token, &session.access_token))
    }
}

#[async_trait(?Send)]
impl AuthHeaders for SessionGateway {
    async fn auth_headers(&self) -> Result<Vec<(String, String)>, AuthError> {
        SessionGateway::auth_headers(self).await
    }
}

#[async_trait(?Send)]
impl AuthGuard for SessionGateway {
    async fn check(&self) -> Result<bool, AuthError> {
        Ok(self.is_authenticated().await)
    }
}
