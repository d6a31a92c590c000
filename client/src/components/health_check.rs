//! Named backend health indicator with a manual refresh.

use leptos::prelude::*;

use crate::state::health::HealthStatus;
use crate::state::services::use_services;

/// Which backend dependency to probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthProbe {
    Postgres,
    DynamoDb,
}

#[component]
pub fn HealthCheck(name: &'static str, probe: HealthProbe) -> impl IntoView {
    let services = use_services();
    let status = RwSignal::new(HealthStatus::Checking);

    let check = move || {
        status.set(HealthStatus::Checking);
        #[cfg(feature = "hydrate")]
        {
            let api = services.api.clone();
            leptos::task::spawn_local(async move {
                let result = match probe {
                    HealthProbe::Postgres => api.postgres_health().await,
                    HealthProbe::DynamoDb => api.dynamo_health().await,
                };
                if let Err(e) = &result {
                    log::warn!("{name} health check failed: {e}");
                }
                status.set(HealthStatus::from_result(&result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&services, probe);
    };

    let initial = check.clone();
    Effect::new(move || initial());

    view! {
        <div class="health-check">
            <span class="health-check__name">{name}</span>
            <span class=move || format!("badge badge--{}", status.get().details().1)>
                <i class=move || format!("icon icon--{}", status.get().details().0)></i>
                {move || status.get().details().2}
            </span>
            <button class="btn health-check__refresh" title="Refresh" on:click=move |_| check()>
                "Refresh"
            </button>
        </div>
    }
}
