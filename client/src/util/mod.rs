//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so state can be tested without a DOM.

pub mod dark_mode;
pub mod storage;
