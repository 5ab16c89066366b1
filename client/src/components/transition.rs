//! Route transition container.
//!
//! DESIGN
//! ======
//! Each route change mounts a fresh page subtree, so the CSS animation for
//! the selected style plays on mount without re-keying the router itself.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::settings::{Settings, TransitionStyle};

/// Class list for the wrapper around the routed page.
pub fn container_class(style: TransitionStyle) -> String {
    format!("page-transition-container {}", style.css_class())
}

/// Wraps routed pages in a container carrying the current transition class.
#[component]
pub fn TransitionWrapper(children: Children) -> impl IntoView {
    let settings = expect_context::<RwSignal<Settings>>();
    let pathname = use_location().pathname;

    view! {
        <div
            class=move || container_class(settings.get().transition)
            data-route=move || pathname.get()
        >
            {children()}
        </div>
    }
}
