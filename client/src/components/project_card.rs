//! Card for one entry on the projects page.

use leptos::prelude::*;

use crate::net::types::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project { name, description, technologies, image, link, .. } = project;

    view! {
        <div class="col-lg-4 col-md-6">
            <div class="project-card glass-effect h-100">
                <div class="project-image">
                    <i class=format!("bi {image} display-1 text-primary")></i>
                </div>
                <div class="project-content p-4">
                    <h4 class="project-title text-light mb-3">{name}</h4>
                    <p class="project-description text-light opacity-75 mb-4">{description}</p>
                    <div class="project-technologies mb-4">
                        {technologies
                            .into_iter()
                            .map(|tech| view! { <span class="tech-tag">{tech}</span> })
                            .collect_view()}
                    </div>
                    <div class="project-actions">
                        <a class="btn btn-outline-light btn-sm me-2" href=link.clone()>
                            <i class="bi bi-eye me-1"></i>
                            "View Demo"
                        </a>
                        <a class="btn btn-outline-primary btn-sm" href=link>
                            <i class="bi bi-github me-1"></i>
                            "Code"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
