//! Owner profile and visitor counter shown on the home page.
//!
//! Both values are optional enrichments: the page renders the built-in
//! profile immediately and swaps in the backend's copy if it arrives.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::Profile;

/// Home page profile state.
#[derive(Clone, Debug)]
pub struct ProfileState {
    pub profile: Profile,
    pub visitor_count: u64,
    pub loading: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            profile: fallback_profile(),
            visitor_count: 0,
            loading: true,
        }
    }
}

impl ProfileState {
    /// Apply a finished profile fetch. `None` keeps the fallback.
    pub fn apply_profile(&mut self, fetched: Option<Profile>) {
        if let Some(profile) = fetched {
            self.profile = profile;
        }
        self.loading = false;
    }

    /// Apply a finished visitor-count fetch. `None` keeps the current count.
    pub fn apply_visitor_count(&mut self, fetched: Option<u64>) {
        if let Some(count) = fetched {
            self.visitor_count = count;
        }
    }
}

/// Built-in profile used until (or instead of) the backend's copy.
pub fn fallback_profile() -> Profile {
    Profile {
        name: "Desmond Opoku Anane".to_owned(),
        title: "Software Engineer & Cybersecurity Analyst".to_owned(),
        email: "anane365221@gmail.com".to_owned(),
        phone: Some("+233 (0) 554640252".to_owned()),
        location: "Accra, Ghana".to_owned(),
        bio: "Full-stack developer specializing in creating scalable web applications and secure systems. Passionate about innovative solutions and cutting-edge technology.".to_owned(),
        experience: "2+ years".to_owned(),
        skills: [
            "React Native",
            "Python",
            "FastAPI",
            "Django",
            "TypeScript",
            "Node.js",
            "MySQL",
            "MongoDB",
            "AWS",
            "Cybersecurity",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect(),
        projects: Vec::new(),
    }
}
