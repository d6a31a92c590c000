//! Build-time client configuration.
//!
//! Values come from `DUMPRUN_*` environment variables captured at compile
//! time, since the WASM bundle has no runtime environment to read.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::identity::AuthConfig;

const DEFAULT_REGION: &str = "us-east-1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub auth: AuthConfig,
    /// Backend base URL without a trailing slash.
    pub api_base_path: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("DUMPRUN_AWS_REGION"),
            option_env!("DUMPRUN_COGNITO_USER_POOL_ID"),
            option_env!("DUMPRUN_COGNITO_CLIENT_ID"),
            option_env!("DUMPRUN_API_BASE_PATH"),
        )
    }

    pub fn from_values(
        region: Option<&str>,
        user_pool_id: Option<&str>,
        client_id: Option<&str>,
        api_base_path: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
        Self {
            auth: AuthConfig {
                region: non_empty(region).unwrap_or_else(|| DEFAULT_REGION.to_owned()),
                user_pool_id: non_empty(user_pool_id).unwrap_or_default(),
                client_id: non_empty(client_id).unwrap_or_default(),
            },
            api_base_path: non_empty(api_base_path)
                .map(|p| p.trim_end_matches('/').to_owned())
                .unwrap_or_default(),
        }
    }

    /// Names of required settings that are missing.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.auth.user_pool_id.is_empty() {
            missing.push("DUMPRUN_COGNITO_USER_POOL_ID");
        }
        if self.auth.client_id.is_empty() {
            missing.push("DUMPRUN_COGNITO_CLIENT_ID");
        }
        if self.api_base_path.is_empty() {
            missing.push("DUMPRUN_API_BASE_PATH");
        }
        missing
    }
}
