//! Dark mode application on the document.
//!
//! Reads the system colour-scheme preference and toggles the `dark-mode`
//! class on `<body>`. Persistence lives in `state::settings`; this module only
//! touches the DOM. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op and report "light" so server rendering stays
//! deterministic; hydration applies the stored preference afterwards.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const BODY_CLASS: &str = "dark-mode";

/// Whether the system prefers a dark colour scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Root wrapper class for the current mode.
pub fn app_class(enabled: bool) -> &'static str {
    if enabled { "App dark-mode" } else { "App light-mode" }
}

/// Toggle the `dark-mode` class on `<body>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(BODY_CLASS, enabled);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
