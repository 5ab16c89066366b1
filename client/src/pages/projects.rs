//! Projects page with category filter buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the built-in catalog immediately, then replaces it with the
//! backend's projects when `/profile` answers. The active filter survives
//! that swap.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::state::projects::{ProjectFilter, ProjectsState};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let state = RwSignal::new(ProjectsState::load(None));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let fetched = crate::net::api::fetch_profile().await.map(|p| p.projects);
        state.try_update(|s| s.projects = ProjectsState::load(fetched).projects);
    });

    let visible = Memo::new(move |_| state.with(ProjectsState::visible));

    view! {
        <div class="page-container projects-page">
            <div class="container mt-5 pt-5">
                <div class="page-header text-center mb-5">
                    <h1 class="display-4 fw-bold text-light mb-4">"My Projects"</h1>
                    <p class="lead text-light opacity-75">
                        "A collection of my recent work and professional projects"
                    </p>
                </div>
                <div class="filters-section mb-5">
                    <div class="d-flex justify-content-center flex-wrap gap-3">
                        {ProjectFilter::ALL
                            .into_iter()
                            .map(|filter| {
                                view! {
                                    <button
                                        class=move || {
                                            if state.with(|s| s.filter) == filter {
                                                "btn filter-btn btn-primary"
                                            } else {
                                                "btn filter-btn btn-outline-light"
                                            }
                                        }
                                        on:click=move |_| state.update(|s| s.filter = filter)
                                    >
                                        {filter.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="projects-grid">
                    <div class="row g-4">
                        <For
                            each=move || visible.get()
                            key=|project| project.id.clone()
                            children=|project| view! { <ProjectCard project=project/> }
                        />
                    </div>
                </div>
                <Show when=move || visible.with(Vec::is_empty)>
                    <div class="text-center py-5">
                        <div class="glass-effect p-5 rounded-4">
                            <i class="bi bi-folder-x display-1 text-muted mb-3"></i>
                            <h4 class="text-light mb-3">"No projects found"</h4>
                            <p class="text-light opacity-75">
                                "No projects match the selected filter. Try a different category."
                            </p>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
