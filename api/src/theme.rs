//! Light/dark theme preference.
//!
//! A stored `"light"`/`"dark"` value wins; otherwise the system color-scheme
//! preference decides. The browser applies the theme as a class on `<html>`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key for the persisted preference.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Stored preference if it parses, else the system preference.
    #[must_use]
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        stored
            .and_then(Self::parse)
            .unwrap_or(if system_prefers_dark { Self::Dark } else { Self::Light })
    }
}
