//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. `view_registry` maps every `ViewId` to the factory the
//! navigator mounts, and `render_chain` nests a resolved chain of factories
//! (layout outermost) into one view.

pub mod dashboard;
pub mod driver_detail;
pub mod drivers;
pub mod login;
pub mod not_found;
pub mod pickup_detail;
pub mod pickups;
pub mod user_detail;
pub mod users;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::*;

use crate::components::app_layout::AppLayout;
use crate::router::registry::ViewRegistry;
use crate::router::routes::ViewId;

/// How to build a mounted view.
#[derive(Clone, Copy)]
pub enum ViewFactory {
    /// A leaf page.
    Page(fn() -> AnyView),
    /// A layout that wraps the next view in the chain.
    Layout(fn(AnyView) -> AnyView),
}

impl std::fmt::Debug for ViewFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(_) => f.write_str("Page"),
            Self::Layout(_) => f.write_str("Layout"),
        }
    }
}

impl PartialEq for ViewFactory {
    fn eq(&self, other: &Self) -> bool {
        matches!((self, other), (Self::Page(_), Self::Page(_)) | (Self::Layout(_), Self::Layout(_)))
    }
}

/// Every view the route table can name.
pub fn view_registry() -> ViewRegistry<ViewFactory> {
    let mut registry = ViewRegistry::new();
    registry.register_ready(ViewId::Login, ViewFactory::Page(|| view! { <login::LoginPage/> }.into_any()));
    registry.register_ready(
        ViewId::Layout,
        ViewFactory::Layout(|outlet| view! { <AppLayout outlet=outlet/> }.into_any()),
    );
    registry.register_ready(ViewId::Dashboard, ViewFactory::Page(|| view! { <dashboard::DashboardPage/> }.into_any()));
    registry.register_ready(ViewId::Users, ViewFactory::Page(|| view! { <users::UsersPage/> }.into_any()));
    registry.register_ready(
        ViewId::UserDetail,
        ViewFactory::Page(|| view! { <user_detail::UserDetailPage/> }.into_any()),
    );
    registry.register_ready(ViewId::Drivers, ViewFactory::Page(|| view! { <drivers::DriversPage/> }.into_any()));
    registry.register_ready(
        ViewId::DriverDetail,
        ViewFactory::Page(|| view! { <driver_detail::DriverDetailPage/> }.into_any()),
    );
    registry.register_ready(ViewId::Pickups, ViewFactory::Page(|| view! { <pickups::PickupsPage/> }.into_any()));
    registry.register_ready(
        ViewId::PickupDetail,
        ViewFactory::Page(|| view! { <pickup_detail::PickupDetailPage/> }.into_any()),
    );
    registry.register_ready(ViewId::NotFound, ViewFactory::Page(|| view! { <not_found::NotFoundPage/> }.into_any()));
    registry
}

/// Build the view for a chain, innermost first, wrapping outward.
pub fn render_chain(chain: &[ViewFactory]) -> AnyView {
    chain.iter().rev().fold(().into_any(), |inner, factory| match factory {
        ViewFactory::Page(page) => page(),
        ViewFactory::Layout(layout) => layout(inner),
    })
}
