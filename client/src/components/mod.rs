//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and repeated content blocks while reading
//! shared state from Leptos context providers.

pub mod navbar;
pub mod notice;
pub mod project_card;
pub mod transition;
