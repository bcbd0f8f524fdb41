//! Colour theme selection.

/// Colour theme applied to the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark theme (no body class).
    #[default]
    Dark,
    /// Light theme (`theme-light` body class).
    Light,
}

impl Theme {
    /// Parses a persisted preference; anything other than `light` is dark.
    #[must_use]
    pub fn from_preference(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(text) if text.eq_ignore_ascii_case("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Parses an explicit choice: `light` or `dark`, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            text if text.eq_ignore_ascii_case("light") => Some(Self::Light),
            text if text.eq_ignore_ascii_case("dark") => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the other theme.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value stored in the preference store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Class added to the body element, if any.
    #[must_use]
    pub const fn body_class(self) -> Option<&'static str> {
        match self {
            Self::Dark => None,
            Self::Light => Some("theme-light"),
        }
    }
}
