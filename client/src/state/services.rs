//! Composition root for the app's long-lived services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `AppServices` and provides it through context as a
//! local stored value; views fetch it with `use_services`. Nothing here is a
//! global: a second `AppServices` would be fully independent.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::identity::{CognitoProvider, IdentityProvider};
use crate::pages::{ViewFactory, view_registry};
use crate::router::intent::SessionIntentStore;
use crate::router::navigator::Navigator;
use crate::router::routes::app_routes;
use crate::state::notifications::Notifier;
use crate::state::session::SessionGateway;

#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub session: Rc<SessionGateway>,
    pub api: Rc<ApiClient>,
    pub notifier: Rc<dyn Notifier>,
    pub navigator: Rc<Navigator<ViewFactory>>,
}

impl AppServices {
    /// Configure the identity provider and wire the services together.
    pub fn build(config: AppConfig, notifier: Rc<dyn Notifier>) -> Self {
        let provider: Rc<dyn IdentityProvider> = Rc::new(CognitoProvider::new());
        let session = Rc::new(SessionGateway::new(provider));
        let missing = config.missing();
        if !missing.is_empty() {
            log::warn!("missing build configuration: {}", missing.join(", "));
        }
        if let Err(e) = session.configure(&config.auth) {
            log::error!("identity provider configuration failed: {e}");
        }
        let api = Rc::new(ApiClient::new(config.api_base_path.clone(), session.clone()));
        let navigator = Rc::new(Navigator::new(
            app_routes(),
            view_registry(),
            session.clone(),
            Rc::new(SessionIntentStore),
            notifier.clone(),
        ));
        Self { config, session, api, notifier, navigator }
    }
}

pub fn provide_services(services: AppServices) {
    provide_context(StoredValue::new_local(services));
}

/// Services provided by `App`.
///
/// # Panics
///
/// When called outside the `App` tree.
pub fn use_services() -> AppServices {
    expect_context::<StoredValue<AppServices, LocalStorage>>().get_value()
}
