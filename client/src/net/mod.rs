//! Networking modules for the external portfolio backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the optional profile/visitor-count enrichments, `contact`
//! owns the contact submission boundary, and `types` defines the wire schema.

pub mod api;
pub mod contact;
pub mod types;
