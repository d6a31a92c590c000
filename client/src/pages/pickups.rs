//! Pickups list page. Shows pending pickups only.

#[cfg(test)]
#[path = "pickups_test.rs"]
mod pickups_test;

use std::rc::Rc;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::components::data_grid::DataGrid;
use crate::net::api::{ApiClient, ApiError, Paging};
use crate::net::types::{Pickup, PickupStatus};
use crate::state::grid::{Column, GridController, GridSource, SortDirection};
use crate::state::services::use_services;

pub struct PickupSource(pub Rc<ApiClient>);

#[async_trait(?Send)]
impl GridSource<Pickup> for PickupSource {
    async fn fetch(&self) -> Result<Vec<Pickup>, ApiError> {
        self.0.list_pickups(Some(PickupStatus::Pending), Paging::default()).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.0.delete_pickup(id).await
    }
}

fn opt(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

pub fn pickup_columns() -> Vec<Column<Pickup>> {
    vec![
        Column::new("id", |p: &Pickup| p.id.clone())
            .header("ID")
            .link(|p: &Pickup| format!("/pickups/{}", p.id))
            .sorted(SortDirection::Descending),
        Column::new("userId", |p: &Pickup| p.user_id.clone()).header("User"),
        Column::new("driverId", |p: &Pickup| opt(p.driver_id.as_ref())).header("Driver"),
        Column::new("status", |p: &Pickup| p.status.as_str().to_owned()),
        Column::new("location", Pickup::location_label),
        Column::new("estimatedWeight", |p: &Pickup| {
            p.estimated_weight.map(|w| w.to_string()).unwrap_or_default()
        }),
        Column::new("wasteType", |p: &Pickup| opt(p.waste_type.as_ref())),
        Column::new("requestedTime", |p: &Pickup| opt(p.requested_time.as_ref())),
        Column::new("assignedTime", |p: &Pickup| opt(p.assigned_time.as_ref())),
        Column::new("completedTime", |p: &Pickup| opt(p.completed_time.as_ref())),
        Column::new("deletedAt", |p: &Pickup| opt(p.deleted_at.as_ref())),
    ]
}

#[component]
pub fn PickupsPage() -> impl IntoView {
    let services = use_services();
    let grid = GridController::new(
        "pickup",
        pickup_columns(),
        Rc::new(PickupSource(services.api.clone())),
        services.notifier.clone(),
    );
    let controller = StoredValue::new_local(Rc::new(grid));

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"Pickups"</h1>
                <a class="btn btn--primary" href="/pickups/new">
                    "Create Pickup"
                </a>
            </header>
            <DataGrid controller=controller/>
        </div>
    }
}
