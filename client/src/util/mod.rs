//! Small helpers shared by pages, components, and state.
//!
//! Browser storage is wrapped here so the rest of the crate compiles and
//! tests the same way under SSR and native test builds.

pub mod storage;
pub mod text;
pub mod validate;
