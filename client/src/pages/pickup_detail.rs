//! Read-only pickup details.

#[cfg(test)]
#[path = "pickup_detail_test.rs"]
mod pickup_detail_test;

use leptos::prelude::*;

use crate::components::navigation_host::use_route_param;
use crate::net::types::Pickup;
use crate::state::form::FormMode;
use crate::state::services::use_services;

/// `(label, value)` rows for the detail card.
pub fn pickup_details(pickup: &Pickup) -> Vec<(&'static str, String)> {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_owned());
    vec![
        ("ID", pickup.id.clone()),
        ("User", pickup.user_id.clone()),
        ("Driver", opt(&pickup.driver_id)),
        ("Status", pickup.status.as_str().to_owned()),
        ("Location", pickup.location_label()),
        (
            "Estimated Weight",
            pickup.estimated_weight.map_or_else(|| "-".to_owned(), |w| w.to_string()),
        ),
        ("Waste Type", opt(&pickup.waste_type)),
        ("Requested", opt(&pickup.requested_time)),
        ("Assigned", opt(&pickup.assigned_time)),
        ("Completed", opt(&pickup.completed_time)),
        ("Deleted", opt(&pickup.deleted_at)),
    ]
}

#[component]
pub fn PickupDetailPage() -> impl IntoView {
    let services = use_services();
    let mode = FormMode::from_param(use_route_param("id").as_deref());
    let pickup = RwSignal::new(None::<Pickup>);
    let loading = RwSignal::new(mode.is_edit());

    if let FormMode::Edit(id) = &mode {
        #[cfg(feature = "hydrate")]
        {
            let api = services.api.clone();
            let notifier = services.notifier.clone();
            let id = id.clone();
            leptos::task::spawn_local(async move {
                match api.get_pickup(&id).await {
                    Ok(found) => pickup.set(Some(found)),
                    Err(e) => notifier.error(&format!("Failed to load pickup: {e}")),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, &services);
    }

    let title = if mode.is_edit() { "Edit Pickup" } else { "New Pickup" };

    view! {
        <div class="record-form">
            <h1 class="record-form__title">{title}</h1>
            <Show when=move || loading.get()>
                <p class="record-form__status">"Loading..."</p>
            </Show>
            {move || {
                pickup
                    .get()
                    .map(|p| {
                        view! {
                            <dl class="record-details">
                                {pickup_details(&p)
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <dt class="record-details__label">{label}</dt>
                                            <dd class="record-details__value">{value}</dd>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </dl>
                        }
                    })
            }}
            <div class="record-form__actions">
                <a class="btn" href="/pickups">
                    "Back to Pickups"
                </a>
            </div>
        </div>
    }
}
