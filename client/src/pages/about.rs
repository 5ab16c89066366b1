//! About page: background, education, and grouped skills.

use leptos::prelude::*;

const SKILL_GROUPS: [(&str, &[&str]); 6] = [
    ("Frontend", &["React", "React Native", "TypeScript", "HTML5", "CSS3", "Bootstrap"]),
    ("Backend", &["Python", "FastAPI", "Django", "Node.js", "Express.js"]),
    ("Databases", &["MongoDB", "MySQL", "PostgreSQL", "SQL"]),
    ("DevOps & Cloud", &["AWS", "Docker", "Git", "CI/CD"]),
    ("Cybersecurity", &["Cyber Operations", "Penetration Testing", "Security Analysis"]),
    ("Tools", &["VS Code", "Postman", "Figma", "Jira", "Linux"]),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page-container about-page">
            <div class="container mt-5 pt-5">
                <div class="page-header text-center mb-5">
                    <h1 class="display-4 fw-bold text-light mb-4">"About Me"</h1>
                    <p class="lead text-light opacity-75">
                        "Passionate Software Engineer & Cybersecurity Analyst"
                    </p>
                </div>
                <div class="row">
                    <div class="col-lg-6 mb-5">
                        <div class="about-card glass-effect p-4 h-100">
                            <h3 class="text-primary mb-4">"My Journey"</h3>
                            <p class="text-light mb-4">
                                "I am a Software Engineer and Cybersecurity Analyst committed to advancing my career in software development by working collaboratively with motivated, results-driven teams."
                            </p>
                            <p class="text-light">
                                "My goal is to leverage my expertise in both frontend and backend technologies to contribute meaningfully to organizational growth while delivering high-impact solutions."
                            </p>
                        </div>
                    </div>
                    <div class="col-lg-6 mb-5">
                        <div class="about-card glass-effect p-4 h-100">
                            <h3 class="text-primary mb-4">"Education & Background"</h3>
                            <div class="education-item mb-4">
                                <h5 class="text-warning">"Computer Science"</h5>
                                <p class="text-light mb-2">"Bachelor's Degree"</p>
                                <p class="text-muted">
                                    "Relevant Coursework: Data Structures, Algorithms, Java, Python, Database Management, AI, Web Development, Cybersecurity"
                                </p>
                            </div>
                            <div class="education-item">
                                <h5 class="text-warning">"Professional Certifications"</h5>
                                <p class="text-light">"Full Stack Web Development, AWS Cloud Practitioner"</p>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="skills-section mt-5">
                    <h2 class="text-center text-light mb-5">"Technical Skills"</h2>
                    <div class="row">
                        {SKILL_GROUPS
                            .into_iter()
                            .map(|(category, items)| {
                                view! {
                                    <div class="col-lg-4 col-md-6 mb-4">
                                        <div class="skill-category-card glass-effect p-4 h-100">
                                            <h4 class="text-primary mb-3">{category}</h4>
                                            <div class="skills-list">
                                                {items
                                                    .iter()
                                                    .map(|skill| view! { <span class="skill-tag">{*skill}</span> })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
