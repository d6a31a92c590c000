//! REST schema DTOs for the DumpRun backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Timestamps stay as the
//! server's ISO strings since the admin UI only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::grid::Record;

/// Postal address shared by users and drivers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// Single-line `street, city, state zip` form used by grid columns.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip_code)
    }
}

/// How a customer or driver prefers to be contacted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PreferredContact {
    #[default]
    Text,
    Call,
}

impl PreferredContact {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Call => "CALL",
        }
    }

    /// Parse the radio-group value; anything unrecognized falls back to `TEXT`.
    pub fn from_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("CALL") { Self::Call } else { Self::Text }
    }
}

/// A customer account as returned by `/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub preferred_contact: Option<PreferredContact>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for `POST /users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Address,
    pub phone_number: String,
    pub preferred_contact: PreferredContact,
}

/// Body for `PUT /users/{userId}`. Phone numbers are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Address,
    pub preferred_contact: PreferredContact,
}

impl From<NewUser> for UpdateUser {
    fn from(user: NewUser) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            address: user.address,
            preferred_contact: user.preferred_contact,
        }
    }
}

/// A driver account as returned by `/drivers`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub preferred_contact: Option<PreferredContact>,
    #[serde(default)]
    pub vehicle_make: Option<String>,
    #[serde(default)]
    pub vehicle_model: Option<String>,
    #[serde(default)]
    pub vehicle_year: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for `POST /drivers`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDriver {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Address,
    pub phone_number: String,
    pub preferred_contact: PreferredContact,
    pub vehicle_make: String,
    pub vehicle_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_year: Option<i32>,
}

/// Body for `PUT /drivers/{driverId}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriver {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Address,
    pub preferred_contact: PreferredContact,
    pub vehicle_make: String,
    pub vehicle_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_year: Option<i32>,
}

impl From<NewDriver> for UpdateDriver {
    fn from(driver: NewDriver) -> Self {
        Self {
            first_name: driver.first_name,
            last_name: driver.last_name,
            email: driver.email,
            address: driver.address,
            preferred_contact: driver.preferred_contact,
            vehicle_make: driver.vehicle_make,
            vehicle_model: driver.vehicle_model,
            vehicle_year: driver.vehicle_year,
        }
    }
}

/// Lifecycle of a pickup request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl PickupStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

/// A scheduled pickup as returned by `/pickups`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pickup {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub driver_id: Option<String>,
    pub status: PickupStatus,
    /// Free-form location (address string or coordinate object).
    #[serde(default)]
    pub location: Option<serde_json::Value>,
    #[serde(default)]
    pub estimated_weight: Option<f64>,
    #[serde(default)]
    pub waste_type: Option<String>,
    #[serde(default)]
    pub requested_time: Option<String>,
    #[serde(default)]
    pub assigned_time: Option<String>,
    #[serde(default)]
    pub completed_time: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

impl Pickup {
    /// Display form of `location`: strings verbatim, other JSON compact.
    pub fn location_label(&self) -> String {
        match &self.location {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// `GET /users` response envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
}

/// `GET /drivers` response envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DriverList {
    #[serde(default)]
    pub drivers: Vec<Driver>,
}

/// `GET /pickups` response envelope.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PickupList {
    #[serde(default)]
    pub pickups: Vec<Pickup>,
}

/// Backend health probe response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthCheck {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Driver {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Pickup {
    fn id(&self) -> &str {
        &self.id
    }
}
