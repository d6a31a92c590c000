//! Authenticated shell: header, section navigation, and the nested outlet.

#[cfg(test)]
#[path = "app_layout_test.rs"]
mod app_layout_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::services::use_services;

/// `(label, href)` for the header navigation.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Dashboard", "/"),
    ("Users", "/users"),
    ("Drivers", "/drivers"),
    ("Pickups", "/pickups"),
];

/// Whether `href` should be highlighted for `pathname`.
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
    }
}

#[component]
pub fn AppLayout(outlet: AnyView) -> impl IntoView {
    let services = use_services();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = services.session.clone();
            let notifier = services.notifier.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = session.sign_out().await {
                    notifier.error(&format!("Sign out failed: {e}"));
                }
                navigate("/login", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&services, &navigate);
    };

    view! {
        <div class="app-layout">
            <header class="app-layout__header toolbar">
                <span class="toolbar__title">"DumpRun Admin"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <nav class="app-layout__nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=href
                                    class="app-layout__nav-link"
                                    class:app-layout__nav-link--active=move || {
                                        is_active(href, &pathname.get())
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__logout" on:click=on_sign_out title="Sign Out">
                    "Sign Out"
                </button>
            </header>
            <main class="app-layout__content">{outlet}</main>
        </div>
    }
}
