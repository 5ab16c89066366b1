//! Services page: offered service cards.

use leptos::prelude::*;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const SERVICES: [Service; 6] = [
    Service {
        icon: "bi-laptop",
        title: "Full-Stack Development",
        description: "End-to-end web application development using modern technologies like React, Node.js, and Python frameworks.",
        features: ["Custom Web Applications", "RESTful APIs", "Database Design", "Performance Optimization"],
    },
    Service {
        icon: "bi-phone",
        title: "Mobile App Development",
        description: "Cross-platform mobile applications development using React Native for iOS and Android platforms.",
        features: ["React Native Apps", "UI/UX Design", "App Store Deployment", "Cross-Platform Solutions"],
    },
    Service {
        icon: "bi-shield-check",
        title: "Cybersecurity Solutions",
        description: "Security assessment, penetration testing, and implementation of robust security measures for applications.",
        features: ["Security Audits", "Penetration Testing", "Security Protocols", "Data Protection"],
    },
    Service {
        icon: "bi-cloud",
        title: "Cloud & DevOps",
        description: "Cloud infrastructure setup, deployment automation, and CI/CD pipeline implementation using AWS and Docker.",
        features: ["AWS Services", "Docker Containers", "CI/CD Pipelines", "Server Management"],
    },
    Service {
        icon: "bi-database",
        title: "Database Management",
        description: "Database design, optimization, and management using SQL and NoSQL database systems.",
        features: ["Database Design", "Performance Tuning", "Data Migration", "Backup Solutions"],
    },
    Service {
        icon: "bi-gear",
        title: "API Development",
        description: "Design and development of robust, scalable RESTful APIs and GraphQL endpoints.",
        features: ["REST APIs", "GraphQL", "API Documentation", "Third-party Integrations"],
    },
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="page-container services-page">
            <div class="container mt-5 pt-5">
                <div class="page-header text-center mb-5">
                    <h1 class="display-4 fw-bold text-light mb-4">"My Services"</h1>
                    <p class="lead text-light opacity-75">
                        "Solutions from first prototype to production"
                    </p>
                </div>
                <div class="row g-4">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="col-lg-4 col-md-6">
                                    <div class="service-card glass-effect p-4 h-100">
                                        <i class=format!("bi {} display-5 text-primary", service.icon)></i>
                                        <h4 class="text-light my-3">{service.title}</h4>
                                        <p class="text-light opacity-75">{service.description}</p>
                                        <ul class="service-features">
                                            {service
                                                .features
                                                .iter()
                                                .map(|feature| view! { <li>{*feature}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-5">
                    <a class="btn btn-primary btn-lg" href="/contact">
                        <i class="bi bi-send me-2"></i>
                        "Start a Project"
                    </a>
                </div>
            </div>
        </div>
    }
}
