//! Landing page: hero, contact details, stats, and visitor counter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Profile and visitor count are fetched once per mount in the browser.
//! Until they arrive (or if they never do) the built-in profile renders.

use leptos::prelude::*;

use crate::state::profile::ProfileState;

pub const CV_PATH: &str = "/DOA_Resume.pdf";
pub const CV_FILE_NAME: &str = "Desmond_Opoku_Anane_CV.pdf";

/// Headline numbers as `(value, label, icon)`.
const STATS: [(&str, &str, &str); 4] = [
    ("2+", "Years Experience", "bi-briefcase"),
    ("15+", "Projects Completed", "bi-folder"),
    ("12+", "Technologies", "bi-gear"),
    ("600+", "Code Commits", "bi-git"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(ProfileState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let profile = crate::net::api::fetch_profile().await;
        state.try_update(|s| s.apply_profile(profile));
        let count = crate::net::api::fetch_visitor_count().await;
        state.try_update(|s| s.apply_visitor_count(count));
    });

    let profile = move || state.with(|s| s.profile.clone());

    view! {
        <div class="home-page page-container">
            <div class="video-background">
                <div class="video-overlay"></div>
            </div>
            <section class="hero-section">
                <div class="container">
                    <div class="row align-items-center min-vh-100">
                        <div class="col-lg-6">
                            <div class="hero-content">
                                <div class="intro-text mb-4">
                                    <span class="greeting">"Hello, I'm"</span>
                                    <h1 class="main-name">{move || profile().name}</h1>
                                    <h2 class="job-title">{move || profile().title}</h2>
                                </div>
                                <p class="hero-description">{move || profile().bio}</p>
                                <div class="contact-details mb-4">
                                    <Show when=move || profile().phone.is_some()>
                                        <div class="contact-item">
                                            <i class="bi bi-telephone-fill"></i>
                                            <span>{move || profile().phone.unwrap_or_default()}</span>
                                        </div>
                                    </Show>
                                    <div class="contact-item">
                                        <i class="bi bi-geo-alt-fill"></i>
                                        <span>{move || profile().location}</span>
                                    </div>
                                    <div class="contact-item">
                                        <i class="bi bi-envelope-fill"></i>
                                        <span>{move || profile().email}</span>
                                    </div>
                                </div>
                                <div class="action-buttons">
                                    <a class="btn btn-primary btn-download" href=CV_PATH download=CV_FILE_NAME>
                                        <i class="bi bi-download me-2"></i>
                                        "Download CV"
                                    </a>
                                    <a class="btn btn-outline-light btn-hire" href="/contact">
                                        <i class="bi bi-send me-2"></i>
                                        "Hire Me"
                                    </a>
                                </div>
                                <div class="skills-list mt-4">
                                    {move || {
                                        profile()
                                            .skills
                                            .into_iter()
                                            .map(|skill| view! { <span class="skill-tag">{skill}</span> })
                                            .collect_view()
                                    }}
                                </div>
                            </div>
                        </div>
                        <div class="col-lg-6">
                            <div class="status-indicator">
                                <div class="pulse-dot"></div>
                                <span>"Available for work"</span>
                            </div>
                            <p class="visitor-count">
                                <i class="bi bi-eye me-2"></i>
                                {move || format!("{} visitors", state.with(|s| s.visitor_count))}
                            </p>
                        </div>
                    </div>
                </div>
            </section>
            <section class="stats-section">
                <div class="container">
                    <div class="stats-grid">
                        {STATS
                            .into_iter()
                            .map(|(number, label, icon)| {
                                view! {
                                    <div class="stat-item">
                                        <div class="stat-icon">
                                            <i class=format!("bi {icon}")></i>
                                        </div>
                                        <div class="stat-content">
                                            <div class="stat-number">{number}</div>
                                            <div class="stat-label">{label}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}
