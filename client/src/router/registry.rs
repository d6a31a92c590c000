//! Lazy view registry with a load-once cache.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::cell::RefCell;
use std::collections::HashMap;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::routes::ViewId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewLoadError {
    #[error("no view registered for {}", .0.name())]
    NotRegistered(ViewId),
    #[error("failed to load {} view: {message}", .view.name())]
    Failed { view: ViewId, message: String },
}

type Loader<V> = Box<dyn Fn() -> LocalBoxFuture<'static, Result<V, String>>>;

/// Maps view ids to loaders; each view is loaded at most once successfully.
pub struct ViewRegistry<V> {
    loaders: HashMap<ViewId, Loader<V>>,
    cache: RefCell<HashMap<ViewId, V>>,
}

impl<V> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self { loaders: HashMap::new(), cache: RefCell::new(HashMap::new()) }
    }
}

impl<V: Clone + 'static> ViewRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an async loader for `view`, replacing any previous one.
    pub fn register(&mut self, view: ViewId, loader: impl Fn() -> LocalBoxFuture<'static, Result<V, String>> + 'static) {
        self.loaders.insert(view, Box::new(loader));
    }

    /// Register a view that needs no asynchronous loading.
    pub fn register_ready(&mut self, view: ViewId, value: V) {
        self.register(view, move || {
            let value = value.clone();
            async move { Ok(value) }.boxed_local()
        });
    }

    pub fn is_loaded(&self, view: ViewId) -> bool {
        self.cache.borrow().contains_key(&view)
    }

    /// Cached view, or run its loader. Failures are not cached.
    ///
    /// # Errors
    ///
    /// `NotRegistered` for unknown ids, `Failed` when the loader fails.
    pub async fn load(&self, view: ViewId) -> Result<V, ViewLoadError> {
        if let Some(cached) = self.cache.borrow().get(&view) {
            return Ok(cached.clone());
        }
        let loader = self.loaders.get(&view).ok_or(ViewLoadError::NotRegistered(view))?;
        let value = loader().await.map_err(|message| ViewLoadError::Failed { view, message })?;
        log::debug!("loaded {} view", view.name());
        self.cache.borrow_mut().insert(view, value.clone());
        Ok(value)
    }
}
