//! Client-side navigation: route table, guard, lazy views, and intent.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` declares the application's route tree, `table` resolves paths
//! against it, `registry` loads views on demand, `intent` remembers where an
//! unauthenticated visitor was headed, and `navigator` runs the
//! resolve/guard/load/mount cycle.

pub mod intent;
pub mod navigator;
pub mod registry;
pub mod routes;
pub mod table;
