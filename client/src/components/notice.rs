//! Dismissible alert banner.

use leptos::prelude::*;

/// Bootstrap-style alert with a close button.
#[component]
pub fn Notice(
    /// Alert variant suffix, e.g. `"success"` or `"warning"`.
    kind: &'static str,
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=format!("alert alert-{kind} alert-dismissible fade show") role="alert">
            <strong>{title}</strong>
            " "
            {move || message.get()}
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| on_dismiss.run(())
            ></button>
        </div>
    }
}
