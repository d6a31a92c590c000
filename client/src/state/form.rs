//! Editable state for the user and driver record forms.
//!
//! DESIGN
//! ======
//! Inputs are addressed by their dotted JSON field names (`address.zipCode`)
//! so the same names drive both validation messages and the rendered form.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{Address, Driver, NewDriver, NewUser, PreferredContact, UpdateDriver, UpdateUser, User};
use crate::util::validate::{FieldErrors, normalize_phone, validate_all};

/// Whether a detail route creates a record or edits an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    /// `None` and `"new"` create; any other id edits.
    pub fn from_param(id: Option<&str>) -> Self {
        match id {
            None | Some("new" | "") => Self::Create,
            Some(id) => Self::Edit(id.to_owned()),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    User,
    Driver,
}

impl FormKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Driver => "driver",
        }
    }

    pub fn list_path(self) -> &'static str {
        match self {
            Self::User => "/users",
            Self::Driver => "/drivers",
        }
    }
}

/// Field values for a user or driver form, all as entered text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub preferred_contact: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: String,
}

impl Default for PersonForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            preferred_contact: PreferredContact::Text.as_str().to_owned(),
            vehicle_make: String::new(),
            vehicle_model: String::new(),
            vehicle_year: String::new(),
        }
    }
}

impl PersonForm {
    fn slot(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "firstName" => &mut self.first_name,
            "lastName" => &mut self.last_name,
            "email" => &mut self.email,
            "phoneNumber" => &mut self.phone_number,
            "address.street" => &mut self.street,
            "address.city" => &mut self.city,
            "address.state" => &mut self.state,
            "address.zipCode" => &mut self.zip_code,
            "preferredContact" => &mut self.preferred_contact,
            "vehicleMake" => &mut self.vehicle_make,
            "vehicleModel" => &mut self.vehicle_model,
            "vehicleYear" => &mut self.vehicle_year,
            _ => return None,
        })
    }

    /// Current value of a named field; empty for unknown names.
    pub fn get(&self, name: &str) -> &str {
        match name {
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "email" => &self.email,
            "phoneNumber" => &self.phone_number,
            "address.street" => &self.street,
            "address.city" => &self.city,
            "address.state" => &self.state,
            "address.zipCode" => &self.zip_code,
            "preferredContact" => &self.preferred_contact,
            "vehicleMake" => &self.vehicle_make,
            "vehicleModel" => &self.vehicle_model,
            "vehicleYear" => &self.vehicle_year,
            _ => "",
        }
    }

    /// Set a named field. Returns `false` for unknown names.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        match self.slot(name) {
            Some(slot) => {
                value.clone_into(slot);
                true
            }
            None => false,
        }
    }

    fn address(&self) -> Address {
        Address {
            street: self.street.trim().to_owned(),
            city: self.city.trim().to_owned(),
            state: self.state.trim().to_ascii_uppercase(),
            zip_code: self.zip_code.trim().to_owned(),
        }
    }

    fn contact(&self) -> PreferredContact {
        PreferredContact::from_value(&self.preferred_contact)
    }

    fn year(&self) -> Option<i32> {
        self.vehicle_year.trim().parse().ok()
    }

    /// Run every rule that applies to `kind` in `mode`.
    pub fn validate(&self, kind: FormKind, mode: &FormMode) -> FieldErrors {
        let mut fields: Vec<(&str, &str)> = ["firstName", "lastName", "email", "address.state", "address.zipCode"]
            .into_iter()
            .map(|name| (name, self.get(name)))
            .collect();
        if !mode.is_edit() {
            fields.push(("phoneNumber", self.phone_number.as_str()));
        }
        if kind == FormKind::Driver && !self.vehicle_year.trim().is_empty() {
            fields.push(("vehicleYear", self.vehicle_year.as_str()));
        }
        validate_all(fields)
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            street: user.address.street.clone(),
            city: user.address.city.clone(),
            state: user.address.state.clone(),
            zip_code: user.address.zip_code.clone(),
            preferred_contact: user.preferred_contact.unwrap_or_default().as_str().to_owned(),
            ..Self::default()
        }
    }

    pub fn from_driver(driver: &Driver) -> Self {
        Self {
            first_name: driver.first_name.clone(),
            last_name: driver.last_name.clone(),
            email: driver.email.clone(),
            phone_number: driver.phone_number.clone(),
            street: driver.address.street.clone(),
            city: driver.address.city.clone(),
            state: driver.address.state.clone(),
            zip_code: driver.address.zip_code.clone(),
            preferred_contact: driver.preferred_contact.unwrap_or_default().as_str().to_owned(),
            vehicle_make: driver.vehicle_make.clone().unwrap_or_default(),
            vehicle_model: driver.vehicle_model.clone().unwrap_or_default(),
            vehicle_year: driver.vehicle_year.map(|y| y.to_string()).unwrap_or_default(),
        }
    }

    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            address: self.address(),
            phone_number: normalize_phone(&self.phone_number),
            preferred_contact: self.contact(),
        }
    }

    pub fn to_update_user(&self) -> UpdateUser {
        self.to_new_user().into()
    }

    pub fn to_new_driver(&self) -> NewDriver {
        NewDriver {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            address: self.address(),
            phone_number: normalize_phone(&self.phone_number),
            preferred_contact: self.contact(),
            vehicle_make: self.vehicle_make.trim().to_owned(),
            vehicle_model: self.vehicle_model.trim().to_owned(),
            vehicle_year: self.year(),
        }
    }

    pub fn to_update_driver(&self) -> UpdateDriver {
        self.to_new_driver().into()
    }
}
