//! Client-side UI state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain Rust values wrapped in `RwSignal`s by pages and the app root.
//! Keeping them free of Leptos types lets every transition be unit tested.

pub mod contact;
pub mod profile;
pub mod projects;
pub mod settings;
