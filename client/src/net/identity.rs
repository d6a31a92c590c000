//! Identity provider boundary and the Cognito user-pool implementation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionGateway` owns caching and deduplication; providers only perform the
//! raw sign-in / sign-out / current-user / fetch-session calls. Cognito is
//! reached through its JSON API (`X-Amz-Target` dispatch), and tokens are
//! kept in `localStorage` so a reload keeps the operator signed in.
//!
//! ERROR HANDLING
//! ==============
//! Cognito `__type` codes map onto `AuthError` variants with user-readable
//! messages; anything unrecognized becomes `AuthError::Unknown`.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::cell::OnceCell;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::util::storage::{self, Scope};

#[cfg(feature = "hydrate")]
const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";
const SESSION_STORAGE_KEY: &str = "dumprun.session";
/// Sessions within this many milliseconds of expiry are refreshed early.
const EXPIRY_SKEW_MS: u64 = 60_000;

/// Identity provider settings supplied once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthConfig {
    pub region: String,
    pub user_pool_id: String,
    pub client_id: String,
}

/// Token bundle for the signed-in operator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id_token: String,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Absolute expiry in epoch milliseconds, when the provider reported one.
    #[serde(default)]
    pub expires_at_ms: Option<u64>,
}

impl Session {
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.expires_at_ms
            .is_some_and(|at| now_ms.saturating_add(EXPIRY_SKEW_MS) >= at)
    }
}

/// Minimal identity of the signed-in operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
    pub user_id: Option<String>,
}

/// Failures from identity-provider operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Please confirm your email address")]
    UserUnconfirmed,
    #[error("User not found")]
    UserNotFound,
    #[error("Password reset required")]
    PasswordResetRequired,
    #[error("Too many attempts. Please try again later")]
    RateLimited,
    #[error("Authentication is not configured")]
    NotConfigured,
    #[error("Authentication is already configured")]
    AlreadyConfigured,
    #[error("No active session")]
    NoSession,
    #[error("{0}")]
    Unknown(String),
}

impl AuthError {
    pub const UNKNOWN_MESSAGE: &'static str = "An unknown error occurred";

    /// Map a Cognito error type (optionally namespaced with `#`) to a variant.
    pub fn from_code(code: &str, message: Option<&str>) -> Self {
        let code = code.rsplit('#').next().unwrap_or(code);
        match code {
            "NotAuthorizedException" => Self::InvalidCredentials,
            "UserNotConfirmedException" => Self::UserUnconfirmed,
            "UserNotFoundException" => Self::UserNotFound,
            "PasswordResetRequiredException" => Self::PasswordResetRequired,
            "TooManyRequestsException" | "TooManyFailedAttemptsException" | "LimitExceededException" => {
                Self::RateLimited
            }
            _ => Self::unknown(message),
        }
    }

    pub fn unknown(message: Option<&str>) -> Self {
        match message {
            Some(m) if !m.trim().is_empty() => Self::Unknown(m.to_owned()),
            _ => Self::Unknown(Self::UNKNOWN_MESSAGE.to_owned()),
        }
    }

    /// Collapse any failure into `Unknown`, keeping the readable message.
    #[must_use]
    pub fn into_unknown(self) -> Self {
        match self {
            Self::Unknown(_) => self,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Raw identity-provider operations consumed by `SessionGateway`.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Apply endpoint/pool settings. A second call fails with `AlreadyConfigured`.
    fn configure(&self, config: &AuthConfig) -> Result<(), AuthError>;

    async fn sign_in(&self, username: &str, password: &str) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// `Ok(None)` when nobody is signed in.
    async fn current_user(&self) -> Result<Option<CurrentUser>, AuthError>;

    async fn fetch_session(&self) -> Result<Session, AuthError>;
}

/// AWS Cognito user-pool provider using the `USER_PASSWORD_AUTH` flow.
#[derive(Debug, Default)]
pub struct CognitoProvider {
    config: OnceCell<AuthConfig>,
}

impl CognitoProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn config(&self) -> Result<&AuthConfig, AuthError> {
        self.config.get().ok_or(AuthError::NotConfigured)
    }

    fn stored_session() -> Option<Session> {
        storage::load_json(Scope::Local, SESSION_STORAGE_KEY)
    }

    fn store_session(session: &Session) {
        storage::save_json(Scope::Local, SESSION_STORAGE_KEY, session);
    }

    fn clear_session() {
        storage::remove_item(Scope::Local, SESSION_STORAGE_KEY);
    }

    async fn call(&self, target: &str, payload: &Value) -> Result<Value, AuthError> {
        let config = self.config()?;
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&cognito_endpoint(&config.region))
                .header("Content-Type", "application/x-amz-json-1.1")
                .header("X-Amz-Target", &format!("{TARGET_PREFIX}.{target}"))
                .body(payload.to_string())
                .map_err(|e| AuthError::Unknown(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Unknown(e.to_string()))?;
            let body = resp.json::<Value>().await.unwrap_or(Value::Null);
            if !resp.ok() {
                return Err(error_from_body(&body));
            }
            Ok(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, target, payload);
            Err(AuthError::Unknown("identity provider not available on server".to_owned()))
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let config = self.config()?;
        let body = self
            .call("InitiateAuth", &refresh_auth_body(&config.client_id, refresh_token))
            .await?;
        let mut session = parse_auth_result(&body, now_ms())?;
        // Cognito does not rotate refresh tokens on REFRESH_TOKEN_AUTH.
        if session.refresh_token.is_none() {
            session.refresh_token = Some(refresh_token.to_owned());
        }
        Self::store_session(&session);
        Ok(session)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for CognitoProvider {
    fn configure(&self, config: &AuthConfig) -> Result<(), AuthError> {
        self.config.set(config.clone()).map_err(|_| AuthError::AlreadyConfigured)
    }

    async fn sign_in(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let config = self.config()?;
        let body = self
            .call("InitiateAuth", &initiate_auth_body(&config.client_id, username, password))
            .await?;
        let session = parse_auth_result(&body, now_ms())?;
        Self::store_session(&session);
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(session) = Self::stored_session() else {
            return Ok(());
        };
        Self::clear_session();
        self.call("GlobalSignOut", &json!({ "AccessToken": session.access_token }))
            .await
            .map(|_| ())
    }

    async fn current_user(&self) -> Result<Option<CurrentUser>, AuthError> {
        let session = match self.fetch_session().await {
            Ok(session) => session,
            Err(AuthError::NoSession) => return Ok(None),
            Err(e) => return Err(e),
        };
        let body = self
            .call("GetUser", &json!({ "AccessToken": session.access_token }))
            .await?;
        Ok(parse_current_user(&body))
    }

    async fn fetch_session(&self) -> Result<Session, AuthError> {
        self.config()?;
        let Some(session) = Self::stored_session() else {
            return Err(AuthError::NoSession);
        };
        if !session.is_expired(now_ms()) {
            return Ok(session);
        }
        match session.refresh_token.as_deref() {
            Some(token) => self.refresh(token).await.inspect_err(|_| Self::clear_session()),
            None => {
                Self::clear_session();
                Err(AuthError::NoSession)
            }
        }
    }
}

/// Regional Cognito user-pool JSON endpoint.
pub fn cognito_endpoint(region: &str) -> String {
    format!("https://cognito-idp.{region}.amazonaws.com/")
}

fn initiate_auth_body(client_id: &str, username: &str, password: &str) -> Value {
    json!({
        "AuthFlow": "USER_PASSWORD_AUTH",
        "ClientId": client_id,
        "AuthParameters": { "USERNAME": username, "PASSWORD": password },
    })
}

fn refresh_auth_body(client_id: &str, refresh_token: &str) -> Value {
    json!({
        "AuthFlow": "REFRESH_TOKEN_AUTH",
        "ClientId": client_id,
        "AuthParameters": { "REFRESH_TOKEN": refresh_token },
    })
}

/// Convert an `InitiateAuth` response into a session.
///
/// Challenges other than a forced password change are not supported by the
/// admin console and surface as `Unknown`.
fn parse_auth_result(body: &Value, now_ms: u64) -> Result<Session, AuthError> {
    if let Some(challenge) = body.get("ChallengeName").and_then(Value::as_str) {
        return Err(match challenge {
            "NEW_PASSWORD_REQUIRED" => AuthError::PasswordResetRequired,
            other => AuthError::Unknown(format!("Unsupported sign-in challenge: {other}")),
        });
    }
    let result = body
        .get("AuthenticationResult")
        .ok_or_else(|| AuthError::unknown(None))?;
    let token = |key: &str| result.get(key).and_then(Value::as_str).map(str::to_owned);
    let (Some(id_token), Some(access_token)) = (token("IdToken"), token("AccessToken")) else {
        return Err(AuthError::unknown(Some("Sign-in response is missing tokens")));
    };
    let expires_at_ms = result
        .get("ExpiresIn")
        .and_then(Value::as_u64)
        .map(|secs| now_ms.saturating_add(secs.saturating_mul(1000)));
    Ok(Session { id_token, access_token, refresh_token: token("RefreshToken"), expires_at_ms })
}

fn parse_current_user(body: &Value) -> Option<CurrentUser> {
    let username = body.get("Username").and_then(Value::as_str)?.to_owned();
    let user_id = body
        .get("UserAttributes")
        .and_then(Value::as_array)
        .and_then(|attrs| {
            attrs
                .iter()
                .find(|a| a.get("Name").and_then(Value::as_str) == Some("sub"))
        })
        .and_then(|a| a.get("Value").and_then(Value::as_str))
        .map(str::to_owned);
    Some(CurrentUser { username, user_id })
}

fn error_from_body(body: &Value) -> AuthError {
    let message = body
        .get("message")
        .or_else(|| body.get("Message"))
        .and_then(Value::as_str);
    match body.get("__type").and_then(Value::as_str) {
        Some(code) => AuthError::from_code(code, message),
        None => AuthError::unknown(message),
    }
}

/// Wall-clock milliseconds; zero outside the browser.
pub(crate) fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
