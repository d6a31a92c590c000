//! Create or edit a user.

use leptos::prelude::*;

use crate::components::record_form::RecordForm;
use crate::state::form::FormKind;

#[component]
pub fn UserDetailPage() -> impl IntoView {
    view! { <RecordForm kind=FormKind::User/> }
}
