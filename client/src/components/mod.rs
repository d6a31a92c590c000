//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome and record surfaces while reading
//! shared services and signals from Leptos context providers.

pub mod app_layout;
pub mod data_grid;
pub mod health_check;
pub mod navigation_host;
pub mod record_form;
pub mod toast_stack;
