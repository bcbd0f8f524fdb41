//! Repository descriptors returned by the listing endpoint.
//!
//! `ApiRepository` is the internal deserialisation target for the wire
//! format; it converts into the public [`RepositoryDescriptor`] used by the
//! pagination and rendering pipeline.

use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// One public repository as displayed on a project card.
///
/// Descriptors are immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    /// Repository name.
    pub name: String,
    /// Free-form description, absent when the owner left it blank.
    pub description: Option<String>,
    /// Canonical repository URL.
    pub url: String,
    /// Project homepage, absent when not configured.
    pub homepage_url: Option<String>,
    /// Primary language detected by GitHub.
    pub primary_language: Option<String>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl RepositoryDescriptor {
    /// Year of the last update, shown on the project card.
    #[must_use]
    pub fn updated_year(&self) -> i32 {
        self.updated_at.year()
    }
}

/// API response type for repository listing.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) html_url: String,
    pub(crate) homepage: Option<String>,
    pub(crate) language: Option<String>,
    pub(crate) updated_at: DateTime<Utc>,
}

/// GitHub reports cleared text fields as `""` rather than `null`.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl From<ApiRepository> for RepositoryDescriptor {
    fn from(value: ApiRepository) -> Self {
        Self {
            name: value.name,
            description: non_blank(value.description),
            url: value.html_url,
            homepage_url: non_blank(value.homepage),
            primary_language: non_blank(value.language),
            updated_at: value.updated_at,
        }
    }
}
