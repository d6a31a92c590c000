//! Backend health indicator state.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use crate::net::api::ApiError;
use crate::net::types::HealthCheck;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HealthStatus {
    #[default]
    Checking,
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    /// Anything other than a `"healthy"` response counts as unhealthy.
    pub fn from_result(result: &Result<HealthCheck, ApiError>) -> Self {
        match result {
            Ok(check) if check.is_healthy() => Self::Healthy,
            _ => Self::Unhealthy,
        }
    }

    /// `(icon, badge variant, text)` for the indicator.
    pub fn details(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Checking => ("arrow-repeat", "neutral", "Checking"),
            Self::Healthy => ("check-circle", "success", "Healthy"),
            Self::Unhealthy => ("x-circle", "danger", "Unhealthy"),
        }
    }
}
