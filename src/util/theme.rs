//! Theme initialization and toggle.
//!
//! Reads the user's preference from a [`PreferenceStore`] and applies it as a
//! `data-theme` attribute on the root element. Toggle writes back to the
//! store and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! No stored preference means no attribute at all, leaving the stylesheet
//! default (and any `prefers-color-scheme` rules) in charge.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::dom::Element;

use super::preferences::PreferenceStore;

/// Attribute written on the root element.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The theme a toggle moves to from `current`. Anything other than an
    /// explicit dark theme flips to dark.
    pub fn flipped_from(current: Option<&str>) -> Self {
        match current.and_then(Self::parse) {
            Some(Self::Dark) => Self::Light,
            _ => Self::Dark,
        }
    }
}

/// Apply the stored preference, if any. Returns the applied theme.
pub fn init_theme<E: Element>(store: &dyn PreferenceStore, key: &str, root: &E) -> Option<Theme> {
    let stored = store.get(key)?;
    let Some(theme) = Theme::parse(&stored) else {
        log::debug!("ignoring unknown stored theme {stored:?}");
        return None;
    };
    root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    Some(theme)
}

/// Flip the current theme, persist it, and return the new value.
pub fn toggle_theme<E: Element>(store: &dyn PreferenceStore, key: &str, root: &E) -> Theme {
    let next = Theme::flipped_from(root.attribute(THEME_ATTRIBUTE).as_deref());
    root.set_attribute(THEME_ATTRIBUTE, next.as_str());
    store.set(key, next.as_str());
    next
}
