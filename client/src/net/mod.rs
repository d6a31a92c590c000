//! Networking modules for the backend REST API and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `identity` talks to the user pool, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
