//! Bridges browser location changes to the navigator and renders its outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lives inside `<Router>` so it can observe the location and push redirects
//! back into history. The first navigation settles behind a full-page loader.

#[cfg(test)]
#[path = "navigation_host_test.rs"]
mod navigation_host_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::{ViewFactory, render_chain};
#[cfg(feature = "hydrate")]
use crate::router::navigator::NavError;
use crate::router::navigator::{Mounted, NavState};
use crate::router::table::RouteMatch;
use crate::state::services::use_services;

/// Path plus query string, as the navigator expects it.
pub fn location_path(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") }
}

/// A parameter of the currently mounted route (`id` for `/users/:id`).
pub fn use_route_param(name: &str) -> Option<String> {
    let route = expect_context::<RwSignal<Option<RouteMatch>>>();
    route.with_untracked(|r| r.as_ref().and_then(|r| r.param(name)).map(str::to_owned))
}

#[component]
pub fn NavigationHost() -> impl IntoView {
    let services = use_services();
    let current_route = expect_context::<RwSignal<Option<RouteMatch>>>();
    let nav_state = RwSignal::new(NavState::Idle);
    let outlet = RwSignal::new(None::<Mounted<ViewFactory>>);

    services.navigator.set_on_transition(move |state| nav_state.set(state.clone()));

    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move || {
        let path = location_path(&location.pathname.get(), &location.search.get());
        let navigator = services.navigator.clone();
        if !nav_state.get_untracked().is_busy() && navigator.current().is_some_and(|r| r.path == path) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match navigator.navigate(&path).await {
                    Ok(mounted) => {
                        let landed = mounted.route.path.clone();
                        current_route.set(Some(mounted.route.clone()));
                        outlet.set(Some(mounted));
                        if landed != path {
                            navigate(&landed, NavigateOptions { replace: true, ..NavigateOptions::default() });
                        }
                    }
                    Err(NavError::Superseded(_)) => {}
                    Err(e) => log::error!("navigation to {path} failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (navigator, &navigate, current_route);
    });

    view! {
        <Show when=move || outlet.with(Option::is_none)>
            <div class="init-loader">
                <div class="init-loader__spinner"></div>
            </div>
        </Show>
        <Show when=move || nav_state.get().is_busy() && outlet.with(Option::is_some)>
            <div class="nav-progress"></div>
        </Show>
        {move || outlet.get().map(|mounted| render_chain(&mounted.views))}
    }
}
