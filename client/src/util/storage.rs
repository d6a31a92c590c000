//! Browser storage helpers for session- and local-scoped values.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation intent lives in per-tab `sessionStorage`; identity tokens
//! live in `localStorage`. Both are hydrate-only; SSR and test builds no-op.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Which browser storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Per-tab `sessionStorage`.
    Session,
    /// Persistent `localStorage`.
    Local,
}

#[cfg(feature = "hydrate")]
fn storage(scope: Scope) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match scope {
        Scope::Session => window.session_storage().ok().flatten(),
        Scope::Local => window.local_storage().ok().flatten(),
    }
}

/// Read a raw string for `key`.
pub fn get_item(scope: Scope, key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage(scope)?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (scope, key);
        None
    }
}

/// Write a raw string for `key`.
pub fn set_item(scope: Scope, key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage(scope) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (scope, key, value);
    }
}

/// Remove `key`.
pub fn remove_item(scope: Scope, key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage(scope) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (scope, key);
    }
}

/// Load a JSON value for `key`.
pub fn load_json<T: DeserializeOwned>(scope: Scope, key: &str) -> Option<T> {
    let raw = get_item(scope, key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value for `key`.
pub fn save_json<T: Serialize>(scope: Scope, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    set_item(scope, key, &raw);
}
