//! Project catalog and category filter for the projects page.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::{Project, ProjectCategory};

/// Filter button selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Button order on the projects page.
    pub const ALL: [Self; 4] = [
        Self::All,
        Self::Category(ProjectCategory::FullStack),
        Self::Category(ProjectCategory::Frontend),
        Self::Category(ProjectCategory::Backend),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Category(ProjectCategory::FullStack) => "Full Stack",
            Self::Category(ProjectCategory::Frontend) => "Frontend",
            Self::Category(ProjectCategory::Backend) => "Backend",
            Self::Category(ProjectCategory::Other) => "Other",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.category == category,
        }
    }
}

/// Projects page state.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub projects: Vec<Project>,
    pub filter: ProjectFilter,
}

impl ProjectsState {
    /// Use the backend's projects when the profile fetch succeeded,
    /// otherwise the built-in list.
    pub fn load(fetched: Option<Vec<Project>>) -> Self {
        Self {
            projects: fetched.unwrap_or_else(fallback_projects),
            filter: ProjectFilter::All,
        }
    }

    /// Projects passing the active filter, in catalog order.
    pub fn visible(&self) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| self.filter.matches(p))
            .cloned()
            .collect()
    }
}

fn project(
    id: &str,
    name: &str,
    description: &str,
    technologies: &[&str],
    category: ProjectCategory,
    image: &str,
) -> Project {
    Project {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        technologies: technologies.iter().map(|t| (*t).to_owned()).collect(),
        category,
        image: image.to_owned(),
        link: "#".to_owned(),
    }
}

/// Built-in catalog shown when the backend is unreachable.
pub fn fallback_projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Saloon Connect",
            "A location-based platform connecting customers with nearby salons for easy booking and payments. Built REST APIs with FastAPI for salon discovery, booking, and payments.",
            &["FastAPI", "React", "MongoDB", "JWT", "Payment Integration"],
            ProjectCategory::FullStack,
            "bi-scissors",
        ),
        project(
            "2",
            "AWS Employee Reward System",
            "Contributed to development of a global employee rewards monitoring system for AWS, utilizing Next.js for frontend and building interactive data-driven pages.",
            &["Next.js", "React", "REST APIs", "Data Visualization"],
            ProjectCategory::Frontend,
            "bi-award",
        ),
        project(
            "3",
            "CollabSpace - Amalitech",
            "Internal training application with microservices architecture. Developed backend services using Java and FastAPI with authentication and user management.",
            &["Java", "FastAPI", "Microservices", "Docker", "CI/CD"],
            ProjectCategory::Backend,
            "bi-people",
        ),
        project(
            "4",
            "GETA Solutions Website",
            "Full company website development with React frontend and Node.js/Express backend. Implemented Services, Careers, and Publications sections.",
            &["React", "Node.js", "Express", "MongoDB", "REST API"],
            ProjectCategory::FullStack,
            "bi-globe",
        ),
        project(
            "5",
            "Tarmove Logistics",
            "Logistics shipping company platform with Next.js frontend. Developed user authentication and role-based access for Shippers and Transporters.",
            &["Next.js", "React", "TypeScript", "UI/UX Design"],
            ProjectCategory::Frontend,
            "bi-truck",
        ),
        project(
            "6",
            "Youth Space Africa",
            "Non-profit organization website with donation and volunteer management system. Implemented secure API endpoints and role-based authorization.",
            &["React", "Node.js", "MongoDB", "Cybersecurity", "Hosting"],
            ProjectCategory::FullStack,
            "bi-heart",
        ),
    ]
}
