//! Per-run state shared by every mode: theme, language, and labels.

use std::io::Write;

use showcase::i18n::Language;
use showcase::preferences::{LANGUAGE_KEY, THEME_KEY, stored_theme};
use showcase::{PreferenceStore, RenderLabels, ShowcaseConfig, ShowcaseError, Theme, Translations};

/// Value of `--theme` that flips the stored theme.
const TOGGLE_THEME: &str = "toggle";

/// Resolved user-facing settings for this run.
#[derive(Debug, Clone)]
pub struct Session {
    /// Active language.
    pub language: Language,
    /// Active theme.
    pub theme: Theme,
    /// Loaded translations, absent when loading failed.
    pub translations: Option<Translations>,
    /// Labels derived from the translations or the English defaults.
    pub labels: RenderLabels,
}

impl Session {
    /// Applies explicit choices to `store`, detects the language, and loads
    /// its translations.
    ///
    /// A translation failure is reported once on `warnings` and the session
    /// continues with English labels.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Configuration`] for an unsupported language
    /// code or theme, leaving the store untouched, and [`ShowcaseError::Io`] when a choice cannot be persisted.
    pub fn prepare<P, W>(
        config: &ShowcaseConfig,
        store: &mut P,
        locale: Option<&str>,
        warnings: &mut W,
    ) -> Result<Self, ShowcaseError>
    where
        P: PreferenceStore + ?Sized,
        W: Write,
    {
        let theme = resolve_theme(config.theme.as_deref(), store)?;

        if let Some(code) = config.language.as_deref() {
            let language =
                Language::from_code(code).ok_or_else(|| ShowcaseError::Configuration {
                    message: format!("unsupported language '{code}' (use pt-br, en, or es)"),
                })?;
            store.set(LANGUAGE_KEY, language.code())?;
        }
        let language = Language::detect(store.get(LANGUAGE_KEY).as_deref(), locale);

        let translations = match Translations::load(&config.translations_dir(), language) {
            Ok(translations) => Some(translations),
            Err(error) => {
                tracing::warn!(%error, %language, "continuing without translations");
                writeln!(warnings, "warning: {error}").map_err(|io_error| ShowcaseError::Io {
                    message: io_error.to_string(),
                })?;
                None
            }
        };
        let labels = translations
            .as_ref()
            .map_or_else(RenderLabels::default, RenderLabels::from_translations);

        Ok(Self {
            language,
            theme,
            translations,
            labels,
        })
    }

    /// Hero phrases for the active language; empty without translations.
    #[must_use]
    pub fn typing_phrases(&self) -> Vec<String> {
        self.translations
            .as_ref()
            .map(Translations::typing_phrases)
            .unwrap_or_default()
    }
}

fn resolve_theme<P>(requested: Option<&str>, store: &mut P) -> Result<Theme, ShowcaseError>
where
    P: PreferenceStore + ?Sized,
{
    let current = stored_theme(store);
    let theme = match requested.map(str::trim) {
        None => return Ok(current),
        Some(value) if value.eq_ignore_ascii_case(TOGGLE_THEME) => current.toggle(),
        Some(value) => Theme::from_name(value).ok_or_else(|| ShowcaseError::Configuration {
            message: format!("unsupported theme '{value}' (use light, dark, or toggle)"),
        })?,
    };
    store.set(THEME_KEY, theme.as_str())?;
    Ok(theme)
}
