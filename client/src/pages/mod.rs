//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and fetches; shared chrome and
//! repeated blocks live in `components`.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod projects;
pub mod resume;
pub mod services;
