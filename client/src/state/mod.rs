//! Application state: services, grids, forms, and UI feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns authentication, `grid` and `form` drive the record pages,
//! `health` and `notifications` back the dashboard and toasts, and
//! `services` wires everything together for the component tree.

pub mod form;
pub mod grid;
pub mod health;
pub mod notifications;
pub mod services;
pub mod session;
