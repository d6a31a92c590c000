use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"The page you requested does not exist."</p>
            <a class="btn" href="/">
                "Back to Dashboard"
            </a>
        </div>
    }
}
