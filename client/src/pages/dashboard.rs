//! Dashboard landing page with backend health indicators.

use leptos::prelude::*;

use crate::components::health_check::{HealthCheck, HealthProbe};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <section class="dashboard-page__health">
                <HealthCheck name="Postgres" probe=HealthProbe::Postgres/>
                <HealthCheck name="DynamoDB" probe=HealthProbe::DynamoDb/>
            </section>
        </div>
    }
}
