//! Top navigation bar with route links, transition menu, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `Settings` from context and writes preference changes through the
//! injected `SettingsStore`, so the persisted value and the signal never
//! diverge.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::settings::{Settings, SettingsStore, TransitionStyle};
use crate::util::storage::LocalStorage;

/// Navigation entries as `(path, label)`.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/services", "Services"),
    ("/resume", "Resume"),
    ("/projects", "Work"),
    ("/contact", "Contact"),
];

/// Link class for `path` given the current pathname.
pub fn nav_link_class(path: &str, current: &str) -> &'static str {
    if path == current { "nav-link active text-warning" } else { "nav-link" }
}

pub fn theme_toggle_title(dark_mode: bool) -> &'static str {
    if dark_mode { "Switch to Light Mode" } else { "Switch to Dark Mode" }
}

fn theme_toggle_icon(dark_mode: bool) -> &'static str {
    if dark_mode { "bi bi-sun-fill" } else { "bi bi-moon-fill" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let settings = expect_context::<RwSignal<Settings>>();
    let store = expect_context::<SettingsStore<LocalStorage>>();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let choose_transition = move |style: TransitionStyle| {
        settings.update(|s| store.set_transition(s, style));
        menu_open.set(false);
    };

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark fixed-top">
            <div class="container">
                <a class="navbar-brand fw-bold d-flex align-items-center" href="/">
                    <div class="bg-warning rounded p-2 me-2">
                        <i class="bi bi-code-slash text-dark"></i>
                    </div>
                    <span>"Desmond."</span>
                </a>
                <ul class="navbar-nav ms-auto">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(path, label)| {
                            view! {
                                <li class="nav-item">
                                    <a class=move || nav_link_class(path, &pathname.get()) href=path>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class="nav-item dropdown">
                        <button
                            class="btn theme-toggle ms-2"
                            title="Change Transition Style"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            <i class="bi bi-magic"></i>
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="dropdown-menu show">
                                {TransitionStyle::ALL
                                    .into_iter()
                                    .map(|style| {
                                        view! {
                                            <button
                                                class="dropdown-item"
                                                class:active=move || settings.get().transition == style
                                                on:click=move |_| choose_transition(style)
                                            >
                                                <i class=format!("{} me-2", style.icon())></i>
                                                {style.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </li>
                    <li class="nav-item">
                        <button
                            class="btn theme-toggle ms-2"
                            title=move || theme_toggle_title(settings.get().dark_mode)
                            on:click=move |_| {
                                settings.update(|s| {
                                    store.toggle_dark_mode(s);
                                });
                            }
                        >
                            <i class=move || theme_toggle_icon(settings.get().dark_mode)></i>
                        </button>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
