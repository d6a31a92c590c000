//! Root component and SSR shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` is the composition root: it creates the toast and route signals,
//! builds `AppServices`, and hands navigation to `NavigationHost`.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::navigation_host::NavigationHost;
use crate::components::toast_stack::ToastStack;
use crate::config::AppConfig;
use crate::router::table::RouteMatch;
use crate::state::notifications::{Notifier, NotificationsState, ToastNotifier};
use crate::state::services::{AppServices, provide_services};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(NotificationsState::default());
    provide_context(toasts);
    provide_context(RwSignal::new(None::<RouteMatch>));

    let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::new(toasts));
    provide_services(AppServices::build(AppConfig::from_build_env(), notifier));

    view! {
        <Stylesheet id="leptos" href="/pkg/dumprun-admin.css"/>
        <Title text="DumpRun Admin"/>
        <Router>
            <NavigationHost/>
        </Router>
        <ToastStack/>
    }
}
