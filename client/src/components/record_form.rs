//! Create/edit form shared by the user and driver detail pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `:id` route parameter picks the mode: `new` creates, anything else
//! loads the record and updates it. Fields validate on input and again on
//! submit; an invalid form is never sent.

#[cfg(test)]
#[path = "record_form_test.rs"]
mod record_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navigation_host::use_route_param;
#[cfg(feature = "hydrate")]
use crate::net::api::ApiError;
use crate::state::form::{FormKind, FormMode, PersonForm};
use crate::state::services::use_services;
use crate::util::text::title_case;
use crate::util::validate::{FieldErrors, update_errors};

/// `(field name, label, input type)` rendered for every record.
const PERSON_FIELDS: [(&str, &str, &str); 8] = [
    ("firstName", "First Name", "text"),
    ("lastName", "Last Name", "text"),
    ("email", "Email", "email"),
    ("phoneNumber", "Phone Number", "tel"),
    ("address.street", "Street", "text"),
    ("address.city", "City", "text"),
    ("address.state", "State", "text"),
    ("address.zipCode", "ZIP Code", "text"),
];

const VEHICLE_FIELDS: [(&str, &str, &str); 3] = [
    ("vehicleMake", "Vehicle Make", "text"),
    ("vehicleModel", "Vehicle Model", "text"),
    ("vehicleYear", "Vehicle Year", "number"),
];

/// Fields shown for `kind`.
pub fn form_fields(kind: FormKind) -> Vec<(&'static str, &'static str, &'static str)> {
    let mut fields = PERSON_FIELDS.to_vec();
    if kind == FormKind::Driver {
        fields.extend(VEHICLE_FIELDS);
    }
    fields
}

/// Phone numbers are fixed once a record exists.
pub fn is_read_only(name: &str, mode: &FormMode) -> bool {
    name == "phoneNumber" && mode.is_edit()
}

pub fn form_title(kind: FormKind, mode: &FormMode) -> String {
    let label = title_case(kind.label());
    match mode {
        FormMode::Create => format!("Create {label}"),
        FormMode::Edit(id) => format!("Edit {label} {id}"),
    }
}

#[component]
pub fn RecordForm(kind: FormKind) -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();
    let mode = FormMode::from_param(use_route_param("id").as_deref());

    let form = RwSignal::new(PersonForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    if let FormMode::Edit(id) = &mode {
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = services.api.clone();
            let notifier = services.notifier.clone();
            let id = id.clone();
            leptos::task::spawn_local(async move {
                let loaded = match kind {
                    FormKind::User => api.get_user(&id).await.map(|u| PersonForm::from_user(&u)),
                    FormKind::Driver => api.get_driver(&id).await.map(|d| PersonForm::from_driver(&d)),
                };
                match loaded {
                    Ok(values) => form.set(values),
                    Err(e) => notifier.error(&format!("Failed to load {}: {e}", kind.label())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }

    let submit_mode = mode.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let values = form.get_untracked();
        let found = values.validate(kind, &submit_mode);
        if !found.is_empty() {
            errors.set(found);
            services.notifier.error("Please correct the highlighted fields");
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = services.api.clone();
            let notifier = services.notifier.clone();
            let navigate = navigate.clone();
            let mode = submit_mode.clone();
            leptos::task::spawn_local(async move {
                let result: Result<_, ApiError> = match (kind, &mode) {
                    (FormKind::User, FormMode::Create) => api.create_user(&values.to_new_user()).await,
                    (FormKind::User, FormMode::Edit(id)) => api.update_user(id, &values.to_update_user()).await,
                    (FormKind::Driver, FormMode::Create) => api.create_driver(&values.to_new_driver()).await,
                    (FormKind::Driver, FormMode::Edit(id)) => {
                        api.update_driver(id, &values.to_update_driver()).await
                    }
                };
                busy.set(false);
                let verb = if mode.is_edit() { "updated" } else { "created" };
                match result {
                    Ok(_) => {
                        notifier.success(&format!("{} {verb}", title_case(kind.label())));
                        navigate(kind.list_path(), NavigateOptions::default());
                    }
                    Err(e) => notifier.error(&format!("Failed to save {}: {e}", kind.label())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    };

    let title = form_title(kind, &mode);
    let field_views = form_fields(kind)
        .into_iter()
        .map(|(name, label, input_type)| {
            let read_only = is_read_only(name, &mode);
            view! {
                <label class="record-form__field">
                    <span class="record-form__label">{label}</span>
                    <input
                        class="record-form__input"
                        type=input_type
                        name=name
                        readonly=read_only
                        prop:value=move || form.with(|f| f.get(name).to_owned())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.set(name, &value);
                            });
                            errors.update(|e| update_errors(e, name, &value));
                        }
                    />
                    <Show when=move || errors.with(|e| e.contains_key(name))>
                        <span class="record-form__error">
                            {move || errors.with(|e| e.get(name).cloned().unwrap_or_default())}
                        </span>
                    </Show>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="record-form">
            <h1 class="record-form__title">{title}</h1>
            <form class="record-form__form" on:submit=on_submit>
                {field_views}
                <fieldset class="record-form__field">
                    <legend class="record-form__label">"Preferred Contact"</legend>
                    {["TEXT", "CALL"]
                        .into_iter()
                        .map(|option| {
                            view! {
                                <label class="record-form__radio">
                                    <input
                                        type="radio"
                                        name="preferredContact"
                                        value=option
                                        prop:checked=move || form.with(|f| f.preferred_contact == option)
                                        on:change=move |_| {
                                            form.update(|f| {
                                                f.set("preferredContact", option);
                                            });
                                        }
                                    />
                                    {title_case(option)}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>
                <div class="record-form__actions">
                    <a class="btn" href=kind.list_path()>
                        "Cancel"
                    </a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}
