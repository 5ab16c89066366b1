//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::transition::TransitionWrapper;
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, not_found::NotFoundPage,
    projects::ProjectsPage, resume::ResumePage, services::ServicesPage,
};
use crate::state::settings::{Settings, SettingsStore};
use crate::util::dark_mode;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the settings signal and its store, then sets up client-side
/// routing inside the navbar and transition chrome.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SettingsStore::new(LocalStorage);
    let settings = RwSignal::new(Settings::default());
    provide_context(store);
    provide_context(settings);

    // Stored preferences only exist in the browser; load them once hydrated.
    Effect::new(move || settings.set(store.load(dark_mode::system_prefers_dark())));
    Effect::new(move || dark_mode::apply(settings.get().dark_mode));

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Stylesheet href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"/>
        <Stylesheet href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css"/>
        <Title text="Desmond Opoku Anane | Portfolio"/>
        <Meta name="description" content="Software Engineer & Cybersecurity Analyst"/>

        <Router>
            <div class=move || dark_mode::app_class(settings.get().dark_mode)>
                <Navbar/>
                <TransitionWrapper>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("services") view=ServicesPage/>
                        <Route path=StaticSegment("resume") view=ResumePage/>
                        <Route path=StaticSegment("projects") view=ProjectsPage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                    </Routes>
                </TransitionWrapper>
            </div>
        </Router>
    }
}
