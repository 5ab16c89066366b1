//! Persisted UI preferences: dark mode and page-transition style.
//!
//! DESIGN
//! ======
//! Preferences live in a `Settings` value owned by the app root and written
//! through a `SettingsStore` over an injected `KeyValueStore`, so nothing
//! reads browser storage implicitly and tests can swap in `MemoryStore`.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::util::storage::KeyValueStore;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const TRANSITION_KEY: &str = "transitionStyle";

/// Animation applied when the route changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionStyle {
    Fade,
    Slide,
    Zoom,
    Cube,
    Flip,
    #[default]
    Bounce,
}

impl TransitionStyle {
    /// Menu order.
    pub const ALL: [Self; 6] = [Self::Fade, Self::Slide, Self::Zoom, Self::Cube, Self::Flip, Self::Bounce];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Zoom => "zoom",
            Self::Cube => "cube",
            Self::Flip => "flip",
            Self::Bounce => "bounce",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fade => "Fade",
            Self::Slide => "Slide",
            Self::Zoom => "Zoom",
            Self::Cube => "Cube",
            Self::Flip => "Flip",
            Self::Bounce => "Bounce",
        }
    }

    /// Bootstrap icon class for the navbar menu.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Fade => "bi-circle",
            Self::Slide => "bi-arrow-right",
            Self::Zoom => "bi-zoom-in",
            Self::Cube => "bi-box",
            Self::Flip => "bi-arrow-repeat",
            Self::Bounce => "bi-arrow-down",
        }
    }

    pub fn css_class(self) -> String {
        format!("{}-transition", self.as_str())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }
}

/// Current preference values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub dark_mode: bool,
    pub transition: TransitionStyle,
}

/// Reads and writes `Settings` through a key-value store.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettingsStore<S> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load stored preferences.
    ///
    /// A missing or unparsable dark-mode entry falls back to
    /// `system_prefers_dark`; a missing or unknown transition falls back to
    /// the default style.
    pub fn load(&self, system_prefers_dark: bool) -> Settings {
        let dark_mode = self
            .store
            .get(DARK_MODE_KEY)
            .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
            .unwrap_or(system_prefers_dark);
        let transition = self
            .store
            .get(TRANSITION_KEY)
            .and_then(|raw| TransitionStyle::parse(&raw))
            .unwrap_or_default();
        Settings { dark_mode, transition }
    }

    pub fn set_dark_mode(&self, settings: &mut Settings, enabled: bool) {
        settings.dark_mode = enabled;
        self.store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" });
    }

    /// Flip dark mode, persist, and return the new value.
    pub fn toggle_dark_mode(&self, settings: &mut Settings) -> bool {
        let next = !settings.dark_mode;
        self.set_dark_mode(settings, next);
        next
    }

    pub fn set_transition(&self, settings: &mut Settings, style: TransitionStyle) {
        settings.transition = style;
        self.store.set(TRANSITION_KEY, style.as_str());
    }
}
