//! UI language selection and translation resources.
//!
//! A translation resource is a flat JSON object of key to string, stored as
//! `<dir>/<code>.json`. Loading never retries or silently switches language:
//! a missing or malformed resource is reported once as
//! [`ShowcaseError::Translation`] and the caller decides what to show.

use std::collections::BTreeMap;
use std::fmt;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::ShowcaseError;

/// Key holding the comma-separated typewriter phrases.
pub const TYPING_WORDS_KEY: &str = "hero_typing_words";

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Brazilian Portuguese, the default.
    #[default]
    PortugueseBrazil,
    /// English.
    English,
    /// Spanish.
    Spanish,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 3] = [Self::PortugueseBrazil, Self::English, Self::Spanish];

    /// Resource code, also used for the `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PortugueseBrazil => "pt-br",
            Self::English => "en",
            Self::Spanish => "es",
        }
    }

    /// Parses a resource code, case-insensitively.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let trimmed = code.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(trimmed))
    }

    /// Picks the language for this session.
    ///
    /// A valid saved choice wins. Otherwise a locale beginning with `en` or
    /// `es` selects English or Spanish; anything else falls back to
    /// Brazilian Portuguese.
    #[must_use]
    pub fn detect(saved: Option<&str>, locale: Option<&str>) -> Self {
        if let Some(language) = saved.and_then(Self::from_code) {
            return language;
        }
        let normalised = locale.map(str::to_ascii_lowercase).unwrap_or_default();
        if normalised.starts_with("en") {
            Self::English
        } else if normalised.starts_with("es") {
            Self::Spanish
        } else {
            Self::PortugueseBrazil
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Key to string mapping for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    language: Language,
    entries: BTreeMap<String, String>,
}

impl Translations {
    /// Builds translations from in-memory entries.
    #[must_use]
    pub fn from_entries<I, K, V>(language: Language, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            language,
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Loads `<dir>/<code>.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Translation`] when the directory or file
    /// cannot be read, or the file is not a flat JSON object of strings.
    pub fn load(dir: &Utf8Path, language: Language) -> Result<Self, ShowcaseError> {
        let file_name = format!("{}.json", language.code());
        let resource = Dir::open_ambient_dir(dir, ambient_authority()).map_err(|error| {
            ShowcaseError::Translation {
                message: format!("failed to open translations directory '{dir}': {error}"),
            }
        })?;
        let content =
            resource
                .read_to_string(&file_name)
                .map_err(|error| ShowcaseError::Translation {
                    message: format!("translation file '{dir}/{file_name}' not found: {error}"),
                })?;
        let entries: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(|error| ShowcaseError::Translation {
                message: format!("translation file '{dir}/{file_name}' is malformed: {error}"),
            })?;

        tracing::debug!(%language, keys = entries.len(), "loaded translations");
        Ok(Self { language, entries })
    }

    /// Language these translations belong to.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns the translation for `key`, ignoring blank values.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Splits a comma-separated value into trimmed, non-empty phrases.
    #[must_use]
    pub fn phrases(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|phrase| !phrase.is_empty())
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Phrases for the hero typewriter.
    #[must_use]
    pub fn typing_phrases(&self) -> Vec<String> {
        self.phrases(TYPING_WORDS_KEY)
    }
}
