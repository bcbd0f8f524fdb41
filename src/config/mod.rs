//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.showcase.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `SHOWCASE_USER`, `SHOWCASE_PAGE`, ...
//! 4. **Command-line arguments** – `--user`/`-u`, `--page`/`-p`, ...
//!
//! # Configuration File
//!
//! ```toml
//! user = "AgnesMillie"
//! exclude = "agnesmillie-portfolio,AgnesMillie"
//! fetch_limit = 50
//! translations_dir = "lang"
//! output = "projects.html"
//! ```

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ShowcaseError;
use crate::github::{GitHubUser, MAX_FETCH_LIMIT, parse_api_base};

/// Login listed when none is configured.
pub const DEFAULT_USER: &str = "AgnesMillie";

/// Repository names hidden when no exclusion list is configured.
pub const DEFAULT_EXCLUDED: [&str; 2] = ["agnesmillie-portfolio", "AgnesMillie"];

const DEFAULT_TRANSLATIONS_DIR: &str = "lang";
const DEFAULT_PREFERENCES_PATH: &str = ".showcase-preferences.json";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `SHOWCASE_USER` or `--user`: GitHub login to list
/// - `SHOWCASE_API_BASE` or `--api-base`: listing endpoint base URL
/// - `SHOWCASE_EXCLUDE` or `--exclude`: comma-separated repository names
/// - `SHOWCASE_PAGE` or `--page`: page of the grid to render
/// - `SHOWCASE_LANGUAGE` or `--language`: UI language code
/// - `SHOWCASE_THEME` or `--theme`: `light` or `dark`
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use showcase::ShowcaseConfig;
///
/// let config = ShowcaseConfig::load().expect("failed to load configuration");
/// let user = config.require_user().expect("user required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SHOWCASE",
    discovery(
        dotfile_name = ".showcase.toml",
        config_file_name = "showcase.toml",
        app_name = "showcase"
    )
)]
pub struct ShowcaseConfig {
    /// GitHub login whose public repositories are listed.
    ///
    /// Can be provided via:
    /// - CLI: `--user <LOGIN>` or `-u <LOGIN>`
    /// - Environment: `SHOWCASE_USER`
    /// - Config file: `user = "..."`
    #[ortho_config(cli_short = 'u')]
    pub user: Option<String>,

    /// Base URL of the listing endpoint. Defaults to the public GitHub API.
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Comma-separated repository names left out of the grid.
    ///
    /// Matching is exact and case-sensitive.
    #[ortho_config(cli_short = 'x')]
    pub exclude: Option<String>,

    /// Number of repositories requested in the single listing call (1..=50).
    #[ortho_config()]
    pub fetch_limit: u8,

    /// Page of the projects grid to render (1-based).
    ///
    /// Out-of-range pages leave the grid on page one.
    #[ortho_config(cli_short = 'p')]
    pub page: usize,

    /// Language code (`pt-br`, `en`, `es`). Persisted when given.
    #[ortho_config(cli_short = 'l')]
    pub language: Option<String>,

    /// Colour theme (`light` or `dark`). Persisted when given.
    #[ortho_config(cli_short = 't')]
    pub theme: Option<String>,

    /// Directory holding `<code>.json` translation files.
    #[ortho_config()]
    pub translations_dir: Option<String>,

    /// JSON file backing the preference store.
    #[ortho_config()]
    pub preferences_path: Option<String>,

    /// File receiving the HTML document. Standard output when absent.
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,

    /// Animates the hero phrases in the terminal instead of rendering HTML.
    ///
    /// Can be provided via:
    /// - CLI: `--typewriter` / `-w`
    /// - Config file: `typewriter = true`
    ///
    /// Note: boolean values are not loaded from the environment.
    #[ortho_config(cli_short = 'w')]
    pub typewriter: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            user: Some(DEFAULT_USER.to_owned()),
            api_base: None,
            exclude: None,
            fetch_limit: MAX_FETCH_LIMIT,
            page: 1,
            language: None,
            theme: None,
            translations_dir: None,
            preferences_path: None,
            output: None,
            typewriter: false,
        }
    }
}

impl ShowcaseConfig {
    /// Returns the configured login, falling back to [`DEFAULT_USER`].
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::InvalidUser`] when the configured login is
    /// blank.
    pub fn require_user(&self) -> Result<GitHubUser, ShowcaseError> {
        GitHubUser::new(self.user.as_deref().unwrap_or(DEFAULT_USER))
    }

    /// Parses the listing endpoint base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::InvalidUrl`] when `api_base` is not an HTTP
    /// URL.
    pub fn api_base_url(&self) -> Result<Url, ShowcaseError> {
        parse_api_base(self.api_base.as_deref())
    }

    /// Names to exclude, trimmed, with blanks dropped.
    ///
    /// Falls back to [`DEFAULT_EXCLUDED`] when no list is configured. An
    /// explicitly empty list excludes nothing.
    #[must_use]
    pub fn excluded_names(&self) -> Vec<String> {
        self.exclude.as_deref().map_or_else(
            || DEFAULT_EXCLUDED.iter().map(|name| (*name).to_owned()).collect(),
            |list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(ToOwned::to_owned)
                    .collect()
            },
        )
    }

    /// Directory holding translation files.
    #[must_use]
    pub fn translations_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(
            self.translations_dir
                .as_deref()
                .unwrap_or(DEFAULT_TRANSLATIONS_DIR),
        )
    }

    /// Location of the preference store.
    #[must_use]
    pub fn preferences_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(
            self.preferences_path
                .as_deref()
                .unwrap_or(DEFAULT_PREFERENCES_PATH),
        )
    }

    /// Output file for the HTML document, if one is configured.
    #[must_use]
    pub fn output_path(&self) -> Option<Utf8PathBuf> {
        self.output.as_deref().map(Utf8PathBuf::from)
    }
}

#[cfg(test)]
mod tests;
