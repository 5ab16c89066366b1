//! Resume page: skill levels, work history, and PDF download.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use leptos::prelude::*;

use super::home::CV_PATH;

struct Experience {
    period: &'static str,
    role: &'static str,
    company: &'static str,
    description: &'static str,
    achievements: &'static [&'static str],
}

const EXPERIENCES: [Experience; 4] = [
    Experience {
        period: "September 2025 – November 2025",
        role: "Software Engineer Intern",
        company: "Amalitech",
        description: "Developed microservices using Java for internal training applications. Built FastAPI-based backend services including authentication and user management.",
        achievements: &[
            "Developed FastAPI microservices for internal applications",
            "Built and maintained Django REST APIs",
            "Implemented asynchronous API endpoints",
            "Collaborated in Agile development environment",
        ],
    },
    Experience {
        period: "October 2024 – February 2025",
        role: "Software Engineer",
        company: "GETA Solutions",
        description: "Contributed to full lifecycle development of company website using React, Node.js, Express.js, and MongoDB.",
        achievements: &[
            "Engineered frontend for Services, Careers, and Publications pages",
            "Developed robust backend architecture with user authentication",
            "Managed website hosting and performance optimization",
            "Built RESTful API endpoints for data management",
        ],
    },
    Experience {
        period: "February 2025",
        role: "Fullstack Developer Intern",
        company: "aeTech Hub, Accra",
        description: "Engineered user interface components for Tarmove logistics company using Next.js.",
        achievements: &[
            "Built Get Started page for user interaction",
            "Developed Sign Up and Login pages for Shipper and Transporter functionalities",
            "Implemented responsive UI components",
        ],
    },
    Experience {
        period: "March 2024 – February 2025",
        role: "Software Engineer (DevOps)",
        company: "Youth Space Africa (YOSA)",
        description: "Contributed to website development and backend services for non-profit organization.",
        achievements: &[
            "Hosted and maintained organization website",
            "Engineered API endpoints for aid requests management",
            "Implemented role-based authorization system",
            "Ensured secure data handling and processing",
        ],
    },
];

/// Skill name and self-assessed level in percent.
const SKILL_LEVELS: [(&str, u8); 8] = [
    ("React & React Native", 90),
    ("Python & FastAPI", 88),
    ("JavaScript/TypeScript", 85),
    ("Node.js & Express", 82),
    ("MongoDB & MySQL", 80),
    ("AWS & Cloud Services", 75),
    ("Docker & DevOps", 70),
    ("Cybersecurity", 78),
];

/// CSS width for a progress bar, clamped to 100%.
fn progress_width(level: u8) -> String {
    format!("{}%", level.min(100))
}

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <div class="page-container resume-page">
            <div class="container mt-5 pt-5">
                <div class="page-header text-center mb-5">
                    <h1 class="display-4 fw-bold text-light mb-4">"My Resume"</h1>
                    <p class="lead text-light opacity-75">"Professional experience and technical expertise"</p>
                </div>
                <div class="skills-section mb-5">
                    <h2 class="text-light mb-4">"Technical Skills"</h2>
                    <div class="row">
                        {SKILL_LEVELS
                            .into_iter()
                            .map(|(name, level)| {
                                view! {
                                    <div class="col-lg-6 mb-4">
                                        <div class="skill-item">
                                            <div class="d-flex justify-content-between mb-2">
                                                <span class="text-light fw-semibold">{name}</span>
                                                <span class="text-primary">{progress_width(level)}</span>
                                            </div>
                                            <div class="progress">
                                                <div
                                                    class="progress-bar"
                                                    role="progressbar"
                                                    style:width=progress_width(level)
                                                    aria-valuenow=level.to_string()
                                                    aria-valuemin="0"
                                                    aria-valuemax="100"
                                                ></div>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="experience-section">
                    <h2 class="text-light mb-4">"Work Experience"</h2>
                    <div class="timeline">
                        {EXPERIENCES
                            .iter()
                            .map(|exp| {
                                view! {
                                    <div class="timeline-item mb-5">
                                        <div class="timeline-card glass-effect p-4">
                                            <div class="d-flex justify-content-between align-items-start flex-wrap mb-3">
                                                <div>
                                                    <h4 class="text-light mb-1">{exp.role}</h4>
                                                    <h5 class="text-primary mb-2">{exp.company}</h5>
                                                </div>
                                                <span class="badge bg-warning text-dark">{exp.period}</span>
                                            </div>
                                            <p class="text-light opacity-75 mb-3">{exp.description}</p>
                                            <h6 class="text-warning mb-2">"Key Achievements:"</h6>
                                            <ul class="achievements-list">
                                                {exp
                                                    .achievements
                                                    .iter()
                                                    .map(|a| view! { <li class="text-light opacity-75 mb-1">{*a}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="download-section text-center mt-5">
                    <div class="glass-effect p-4 rounded-4">
                        <h3 class="text-light mb-3">"Download Full Resume"</h3>
                        <p class="text-light opacity-75 mb-4">
                            "Get the complete version of my resume with detailed project information and references."
                        </p>
                        <a class="btn btn-primary btn-lg" href=CV_PATH download="">
                            <i class="bi bi-download me-2"></i>
                            "Download PDF Resume"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
