//! Localised strings used by the renderers.

use crate::i18n::Translations;

/// Localised text shown around the project cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLabels {
    /// Fallback when a repository has no description.
    pub no_description: String,
    /// Placeholder when no repositories remain after filtering.
    pub empty_placeholder: String,
    /// Message shown when the listing could not be fetched.
    pub error_message: String,
    /// Tooltip for the repository link.
    pub code_link_title: String,
    /// Tooltip for the homepage link.
    pub homepage_link_title: String,
    /// Accessible label for the previous-page control.
    pub previous_label: String,
    /// Accessible label for the next-page control.
    pub next_label: String,
}

impl Default for RenderLabels {
    fn default() -> Self {
        Self {
            no_description: "No description provided.".to_owned(),
            empty_placeholder: "No public repositories found.".to_owned(),
            error_message: "Could not load projects right now. Please try again later."
                .to_owned(),
            code_link_title: "GitHub Code".to_owned(),
            homepage_link_title: "Live Demo".to_owned(),
            previous_label: "Previous page".to_owned(),
            next_label: "Next page".to_owned(),
        }
    }
}

impl RenderLabels {
    /// Overrides the defaults with whatever keys `translations` provides.
    #[must_use]
    pub fn from_translations(translations: &Translations) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, fallback: String| {
            translations
                .get(key)
                .map_or(fallback, ToOwned::to_owned)
        };
        Self {
            no_description: pick("projects_no_description", defaults.no_description),
            empty_placeholder: pick("projects_empty", defaults.empty_placeholder),
            error_message: pick("projects_error", defaults.error_message),
            code_link_title: pick("projects_code_link", defaults.code_link_title),
            homepage_link_title: pick("projects_homepage_link", defaults.homepage_link_title),
            previous_label: pick("pagination_previous", defaults.previous_label),
            next_label: pick("pagination_next", defaults.next_label),
        }
    }
}
