//! REST client for the DumpRun backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: requests fail with `ApiError::Unavailable`
//! since the backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Http` carrying the status and any JSON
//! error body. Callers convert errors into notifications at the action
//! boundary; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::identity::AuthError;
use super::types::{
    Driver, DriverList, HealthCheck, NewDriver, NewUser, Pickup, PickupList, PickupStatus, UpdateDriver, UpdateUser,
    User, UserList,
};

const HEALTH_POSTGRES: &str = "/health/postgres";
const HEALTH_DYNAMODB: &str = "/health/dynamodb";
const USERS: &str = "/users";
const USER: &str = "/users/{userId}";
const DRIVERS: &str = "/drivers";
const DRIVER: &str = "/drivers/{driverId}";
const PICKUPS: &str = "/pickups";
const PICKUP: &str = "/pickups/{pickupId}";

/// Failures from backend calls.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("HTTP error! status: {status}{}", body_suffix(.body))]
    Http { status: u16, body: Option<Value> },
    /// The response body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),
    /// No session was available to authorize the request.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// Backend calls are browser-only.
    #[error("not available on server")]
    Unavailable,
}

fn body_suffix(body: &Option<Value>) -> String {
    match body {
        Some(value) => format!(": {value}"),
        None => String::new(),
    }
}

/// HTTP verbs used by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Only POST/PUT/PATCH carry a JSON body.
    pub fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

/// Source of per-request authorization headers.
#[async_trait(?Send)]
pub trait AuthHeaders {
    async fn auth_headers(&self) -> Result<Vec<(String, String)>, AuthError>;
}

/// Optional paging parameters for list endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Paging {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Paging {
    fn query(self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("limit", self.limit.map(|v| v.to_string())),
            ("offset", self.offset.map(|v| v.to_string())),
        ]
    }
}

/// Fully-resolved request ready for the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// Percent-encode a single path segment.
fn encode_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Substitute `{name}` placeholders with encoded values.
pub fn expand_path(template: &str, params: &[(&str, &str)]) -> String {
    let mut path = template.to_owned();
    for (name, value) in params {
        path = path.replace(&format!("{{{name}}}"), &encode_segment(value));
    }
    path
}

/// Encode query parameters, skipping `None` values. Empty when nothing is set.
pub fn query_string(params: &[(&str, Option<String>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (name, value) in params {
        if let Some(value) = value {
            serializer.append_pair(name, value);
            any = true;
        }
    }
    if any { serializer.finish() } else { String::new() }
}

/// Build the request for `template` against `base_path`.
pub fn build_request(
    base_path: &str,
    method: Method,
    template: &str,
    path_params: &[(&str, &str)],
    query: &[(&str, Option<String>)],
    body: Option<&Value>,
) -> ApiRequest {
    let mut url = format!("{}{}", base_path.trim_end_matches('/'), expand_path(template, path_params));
    let qs = query_string(query);
    if !qs.is_empty() {
        url.push('?');
        url.push_str(&qs);
    }
    let body = body.filter(|_| method.allows_body()).map(Value::to_string);
    ApiRequest { method, url, body }
}

/// Authorization headers for a session: bearer id token plus the access token.
pub fn session_headers(id_token: &str, access_token: &str) -> Vec<(String, String)> {
    vec![
        ("Authorization".to_owned(), format!("Bearer {id_token}")),
        ("X-Amz-Security-Token".to_owned(), access_token.to_owned()),
    ]
}

fn decode<T: DeserializeOwned>(body: Option<Value>) -> Result<T, ApiError> {
    let body = body.ok_or_else(|| ApiError::Decode("empty response body".to_owned()))?;
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Typed client for the backend's resource collections.
pub struct ApiClient {
    base_path: String,
    auth: Rc<dyn AuthHeaders>,
}

impl ApiClient {
    pub fn new(base_path: impl Into<String>, auth: Rc<dyn AuthHeaders>) -> Self {
        Self { base_path: base_path.into(), auth }
    }

    /// Issue one request and return the parsed JSON body, if any.
    ///
    /// # Errors
    ///
    /// `Auth` when no session is available, `Network` on transport failure,
    /// and `Http` for non-success statuses.
    pub async fn request(
        &self,
        method: Method,
        template: &str,
        path_params: &[(&str, &str)],
        query: &[(&str, Option<String>)],
        body: Option<Value>,
    ) -> Result<Option<Value>, ApiError> {
        let request = build_request(&self.base_path, method, template, path_params, query, body.as_ref());
        let headers = self.auth.auth_headers().await?;
        log::debug!("{} {}", request.method.as_str(), request.url);
        send(request, headers).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        template: &str,
        path_params: &[(&str, &str)],
        query: &[(&str, Option<String>)],
    ) -> Result<T, ApiError> {
        decode(self.request(Method::Get, template, path_params, query, None).await?)
    }

    pub async fn postgres_health(&self) -> Result<HealthCheck, ApiError> {
        self.get(HEALTH_POSTGRES, &[], &[]).await
    }

    pub async fn dynamo_health(&self) -> Result<HealthCheck, ApiError> {
        self.get(HEALTH_DYNAMODB, &[], &[]).await
    }

    pub async fn list_users(&self, paging: Paging) -> Result<Vec<User>, ApiError> {
        let list: UserList = self.get(USERS, &[], &paging.query()).await?;
        Ok(list.users)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        self.get(USER, &[("userId", user_id)], &[]).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<Option<Value>, ApiError> {
        self.request(Method::Post, USERS, &[], &[], Some(encode(user)?)).await
    }

    pub async fn update_user(&self, user_id: &str, user: &UpdateUser) -> Result<Option<Value>, ApiError> {
        self.request(Method::Put, USER, &[("userId", user_id)], &[], Some(encode(user)?))
            .await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, USER, &[("userId", user_id)], &[], None)
            .await
            .map(|_| ())
    }

    pub async fn list_drivers(&self, paging: Paging) -> Result<Vec<Driver>, ApiError> {
        let list: DriverList = self.get(DRIVERS, &[], &paging.query()).await?;
        Ok(list.drivers)
    }

    pub async fn get_driver(&self, driver_id: &str) -> Result<Driver, ApiError> {
        self.get(DRIVER, &[("driverId", driver_id)], &[]).await
    }

    pub async fn create_driver(&self, driver: &NewDriver) -> Result<Option<Value>, ApiError> {
        self.request(Method::Post, DRIVERS, &[], &[], Some(encode(driver)?)).await
    }

    pub async fn update_driver(&self, driver_id: &str, driver: &UpdateDriver) -> Result<Option<Value>, ApiError> {
        self.request(Method::Put, DRIVER, &[("driverId", driver_id)], &[], Some(encode(driver)?))
            .await
    }

    pub async fn delete_driver(&self, driver_id: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, DRIVER, &[("driverId", driver_id)], &[], None)
            .await
            .map(|_| ())
    }

    pub async fn list_pickups(&self, status: Option<PickupStatus>, paging: Paging) -> Result<Vec<Pickup>, ApiError> {
        let mut query = vec![("status", status.map(|s| s.as_str().to_owned()))];
        query.extend(paging.query());
        let list: PickupList = self.get(PICKUPS, &[], &query).await?;
        Ok(list.pickups)
    }

    pub async fn get_pickup(&self, pickup_id: &str) -> Result<Pickup, ApiError> {
        self.get(PICKUP, &[("pickupId", pickup_id)], &[]).await
    }

    pub async fn delete_pickup(&self, pickup_id: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, PICKUP, &[("pickupId", pickup_id)], &[], None)
            .await
            .map(|_| ())
    }
}

async fn send(request: ApiRequest, headers: Vec<(String, String)>) -> Result<Option<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .header("Content-Type", "application/json");
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let is_json = resp
            .headers()
            .get("content-type")
            .is_some_and(|ct| ct.contains("application/json"));
        let body = if is_json {
            match resp.json::<Value>().await {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("failed to parse JSON response: {e}");
                    None
                }
            }
        } else {
            None
        };
        if !resp.ok() {
            return Err(ApiError::Http { status: resp.status(), body });
        }
        Ok(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, headers);
        Err(ApiError::Unavailable)
    }
}
