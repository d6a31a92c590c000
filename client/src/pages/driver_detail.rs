//! Create or edit a driver.

use leptos::prelude::*;

use crate::components::record_form::RecordForm;
use crate::state::form::FormKind;

#[component]
pub fn DriverDetailPage() -> impl IntoView {
    view! { <RecordForm kind=FormKind::Driver/> }
}
