//! Drivers list page.

#[cfg(test)]
#[path = "drivers_test.rs"]
mod drivers_test;

use std::rc::Rc;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::components::data_grid::DataGrid;
use crate::net::api::{ApiClient, ApiError, Paging};
use crate::net::types::Driver;
use crate::state::grid::{Column, GridController, GridSource, SortDirection};
use crate::state::services::use_services;

pub struct DriverSource(pub Rc<ApiClient>);

#[async_trait(?Send)]
impl GridSource<Driver> for DriverSource {
    async fn fetch(&self) -> Result<Vec<Driver>, ApiError> {
        self.0.list_drivers(Paging::default()).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.0.delete_driver(id).await
    }
}

pub fn driver_columns() -> Vec<Column<Driver>> {
    vec![
        Column::new("id", |d: &Driver| d.id.clone())
            .header("ID")
            .link(|d: &Driver| format!("/drivers/{}", d.id))
            .sorted(SortDirection::Descending),
        Column::new("firstName", |d: &Driver| d.first_name.clone()),
        Column::new("lastName", |d: &Driver| d.last_name.clone()),
        Column::new("email", |d: &Driver| d.email.clone()),
        Column::new("phoneNumber", |d: &Driver| d.phone_number.clone()),
        Column::new("address", |d: &Driver| d.address.one_line()),
        Column::new("vehicleMake", |d: &Driver| d.vehicle_make.clone().unwrap_or_default()),
        Column::new("vehicleModel", |d: &Driver| d.vehicle_model.clone().unwrap_or_default()),
        Column::new("vehicleYear", |d: &Driver| d.vehicle_year.map(|y| y.to_string()).unwrap_or_default()),
        Column::new("createdAt", |d: &Driver| d.created_at.clone().unwrap_or_default()),
        Column::new("updatedAt", |d: &Driver| d.updated_at.clone().unwrap_or_default()),
    ]
}

#[component]
pub fn DriversPage() -> impl IntoView {
    let services = use_services();
    let grid = GridController::new(
        "driver",
        driver_columns(),
        Rc::new(DriverSource(services.api.clone())),
        services.notifier.clone(),
    );
    let controller = StoredValue::new_local(Rc::new(grid));

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"Drivers"</h1>
                <a class="btn btn--primary" href="/drivers/new">
                    "Create Driver"
                </a>
            </header>
            <DataGrid controller=controller/>
        </div>
    }
}
