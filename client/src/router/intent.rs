//! Navigation intent: where an unauthenticated visitor was trying to go.
//!
//! One slot per tab. A newer attempt overwrites the stored path, and the
//! post-sign-in redirect consumes it with `take`.

#[cfg(test)]
#[path = "intent_test.rs"]
mod intent_test;

use std::cell::RefCell;

use crate::util::storage::{self, Scope};

/// Session-storage key holding the pending path.
pub const INTENT_STORAGE_KEY: &str = "intendedRoute";

pub trait IntentStore {
    fn store(&self, path: &str);

    fn peek(&self) -> Option<String>;

    /// Read and clear the stored path.
    fn take(&self) -> Option<String>;
}

/// Intent kept in the tab's `sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionIntentStore;

impl IntentStore for SessionIntentStore {
    fn store(&self, path: &str) {
        storage::set_item(Scope::Session, INTENT_STORAGE_KEY, path);
    }

    fn peek(&self) -> Option<String> {
        storage::get_item(Scope::Session, INTENT_STORAGE_KEY)
    }

    fn take(&self) -> Option<String> {
        let path = self.peek();
        if path.is_some() {
            storage::remove_item(Scope::Session, INTENT_STORAGE_KEY);
        }
        path
    }
}

/// In-memory intent for non-browser builds and tests.
#[derive(Debug, Default)]
pub struct MemoryIntentStore {
    slot: RefCell<Option<String>>,
}

impl IntentStore for MemoryIntentStore {
    fn store(&self, path: &str) {
        *self.slot.borrow_mut() = Some(path.to_owned());
    }

    fn peek(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn take(&self) -> Option<String> {
        self.slot.borrow_mut().take()
    }
}
