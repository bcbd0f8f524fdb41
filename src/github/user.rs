//! Identity wrappers for the listing endpoint.

use url::Url;

use crate::error::ShowcaseError;

/// Default public GitHub API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// GitHub login whose public repositories are listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubUser(String);

impl GitHubUser {
    /// Validates that the login is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::InvalidUser`] when the supplied string is
    /// blank.
    pub fn new(login: impl AsRef<str>) -> Result<Self, ShowcaseError> {
        let trimmed = login.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ShowcaseError::InvalidUser);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the login.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the API path listing this user's repositories.
    pub(crate) fn repos_path(&self) -> String {
        format!("/users/{}/repos", self.0)
    }
}

impl AsRef<str> for GitHubUser {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Parses the API base URL, falling back to [`DEFAULT_API_BASE`].
///
/// # Errors
///
/// Returns [`ShowcaseError::InvalidUrl`] when the value cannot be parsed or
/// does not use an HTTP scheme.
pub fn parse_api_base(value: Option<&str>) -> Result<Url, ShowcaseError> {
    let raw = value.map_or(DEFAULT_API_BASE, str::trim);
    let parsed = Url::parse(raw).map_err(|error| ShowcaseError::InvalidUrl(error.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ShowcaseError::InvalidUrl(format!(
            "unsupported scheme `{other}`"
        ))),
    }
}
