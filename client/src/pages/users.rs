//! Users list page.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::rc::Rc;

use async_trait::async_trait;
use leptos::prelude::*;

use crate::components::data_grid::DataGrid;
use crate::net::api::{ApiClient, ApiError, Paging};
use crate::net::types::User;
use crate::state::grid::{Column, GridController, GridSource, SortDirection};
use crate::state::services::use_services;

pub struct UserSource(pub Rc<ApiClient>);

#[async_trait(?Send)]
impl GridSource<User> for UserSource {
    async fn fetch(&self) -> Result<Vec<User>, ApiError> {
        self.0.list_users(Paging::default()).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.0.delete_user(id).await
    }
}

pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", |u: &User| u.id.clone())
            .header("ID")
            .link(|u: &User| format!("/users/{}", u.id))
            .sorted(SortDirection::Descending),
        Column::new("firstName", |u: &User| u.first_name.clone()),
        Column::new("lastName", |u: &User| u.last_name.clone()),
        Column::new("email", |u: &User| u.email.clone()),
        Column::new("phoneNumber", |u: &User| u.phone_number.clone()),
        Column::new("address", |u: &User| u.address.one_line()),
        Column::new("createdAt", |u: &User| u.created_at.clone().unwrap_or_default()),
        Column::new("updatedAt", |u: &User| u.updated_at.clone().unwrap_or_default()),
    ]
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let services = use_services();
    let grid = GridController::new(
        "user",
        user_columns(),
        Rc::new(UserSource(services.api.clone())),
        services.notifier.clone(),
    );
    let controller = StoredValue::new_local(Rc::new(grid));

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"Users"</h1>
                <a class="btn btn--primary" href="/users/new">
                    "Create User"
                </a>
            </header>
            <DataGrid controller=controller/>
        </div>
    }
}
