//! Wire DTOs for the portfolio backend API.
//!
//! DESIGN
//! ======
//! The backend owns these shapes; fields the backend may omit carry serde
//! defaults so a partially populated profile still deserializes and the
//! pages can render whatever arrived.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// JSON body of `POST /contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Structured error body returned by the backend on rejected requests.
///
/// `detail` is usually a string, but validation failures send a list of
/// objects instead, so it is kept as raw JSON.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The human-readable detail, if the backend sent a non-empty string.
    pub fn detail_text(&self) -> Option<&str> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Response of `GET /visitor-count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct VisitorCount {
    pub visitor_count: u64,
}

/// Category used by the projects page filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[serde(rename = "fullstack")]
    FullStack,
    Frontend,
    Backend,
    /// Missing or unrecognized category; only listed under "All Projects".
    #[default]
    #[serde(other)]
    Other,
}

/// A portfolio project as served by `GET /profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub category: ProjectCategory,
    /// Bootstrap icon class shown in place of a screenshot.
    #[serde(default = "default_project_image")]
    pub image: String,
    #[serde(default = "default_project_link")]
    pub link: String,
}

fn default_project_image() -> String {
    "bi-code-slash".to_owned()
}

fn default_project_link() -> String {
    "#".to_owned()
}

/// Owner profile descriptor returned by `GET /profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: String,
    pub bio: String,
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}
