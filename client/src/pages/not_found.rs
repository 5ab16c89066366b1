//! Fallback view for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-container not-found-page">
            <div class="container mt-5 pt-5 text-center">
                <h1 class="display-4 fw-bold text-light mb-4">"Page not found"</h1>
                <a class="btn btn-outline-light" href="/">"Back home"</a>
            </div>
        </div>
    }
}
