//! Test helpers for constructing `RepositoryDescriptor` fixtures.

use chrono::{TimeZone, Utc};

use super::RepositoryDescriptor;

/// Constructs a descriptor with only a name; optional fields are absent and
/// the canonical URL is derived from the name.
#[must_use]
pub fn minimal_repository(name: &str) -> RepositoryDescriptor {
    RepositoryDescriptor {
        name: name.to_owned(),
        description: None,
        url: format!("https://github.com/octocat/{name}"),
        homepage_url: None,
        primary_language: None,
        updated_at: Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap_or_default(),
    }
}

/// Creates `count` descriptors named `repo-1` through `repo-{count}`.
#[must_use]
pub fn numbered_repositories(count: usize) -> Vec<RepositoryDescriptor> {
    (1..=count)
        .map(|index| minimal_repository(&format!("repo-{index}")))
        .collect()
}
