//! The application's route tree.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use super::table::{RouteDef, RouteTable};

/// Identifies a lazily-loaded view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewId {
    Login,
    Layout,
    Dashboard,
    Users,
    UserDetail,
    Drivers,
    DriverDetail,
    Pickups,
    PickupDetail,
    NotFound,
}

impl ViewId {
    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Layout => "layout",
            Self::Dashboard => "dashboard",
            Self::Users => "users",
            Self::UserDetail => "user-detail",
            Self::Drivers => "drivers",
            Self::DriverDetail => "driver-detail",
            Self::Pickups => "pickups",
            Self::PickupDetail => "pickup-detail",
            Self::NotFound => "not-found",
        }
    }
}

/// `/login` is guest-only; everything else renders inside the protected layout.
pub fn app_routes() -> RouteTable {
    RouteTable::new(vec![
        RouteDef::new("/login", ViewId::Login).guest_only(),
        RouteDef::new("", ViewId::Layout).protected().children(vec![
            RouteDef::new("/", ViewId::Dashboard),
            RouteDef::new("/users", ViewId::Users),
            RouteDef::new("/users/:id", ViewId::UserDetail),
            RouteDef::new("/drivers", ViewId::Drivers),
            RouteDef::new("/drivers/:id", ViewId::DriverDetail),
            RouteDef::new("/pickups", ViewId::Pickups),
            RouteDef::new("/pickups/:id", ViewId::PickupDetail),
            RouteDef::new("*", ViewId::NotFound),
        ]),
    ])
}
