//! Repository source backed by the public GitHub listing endpoint.
//!
//! The trait-based design lets the projects pipeline run against a mock in
//! tests while [`OctocrabRepositorySource`] performs the single anonymous
//! HTTP request in production.

use async_trait::async_trait;
use octocrab::Octocrab;
use url::Url;

use crate::error::ShowcaseError;
use crate::github::models::{ApiRepository, RepositoryDescriptor};
use crate::github::user::GitHubUser;

use client::build_octocrab_client;
use error_mapping::map_octocrab_error;

mod client;
mod error_mapping;
mod types;

pub use types::{
    ListRepositoriesParams, MAX_FETCH_LIMIT, RepositoryType, SortDirection, SortField,
};

/// Source of the repository descriptors shown in the projects grid.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetch the most recently pushed repositories, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Network`] on transport failure or any
    /// non-success response.
    async fn fetch_repositories(&self) -> Result<Vec<RepositoryDescriptor>, ShowcaseError>;
}

/// Octocrab-backed repository source.
pub struct OctocrabRepositorySource {
    client: Octocrab,
    user: GitHubUser,
    params: ListRepositoriesParams,
}

impl OctocrabRepositorySource {
    /// Creates a source from an existing Octocrab client.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::InvalidPagination`] when `params` are out of
    /// range.
    pub fn new(
        client: Octocrab,
        user: GitHubUser,
        params: ListRepositoriesParams,
    ) -> Result<Self, ShowcaseError> {
        validate_params(&params)?;
        Ok(Self {
            client,
            user,
            params,
        })
    }

    /// Builds an anonymous client against `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `ShowcaseError::InvalidUrl` when the base URI cannot be parsed
    /// and `ShowcaseError::InvalidPagination` when `params` are out of range.
    pub fn for_api_base(
        api_base: &Url,
        user: GitHubUser,
        params: ListRepositoriesParams,
    ) -> Result<Self, ShowcaseError> {
        let client = build_octocrab_client(api_base)?;
        Self::new(client, user, params)
    }
}

#[async_trait]
impl RepositorySource for OctocrabRepositorySource {
    async fn fetch_repositories(&self) -> Result<Vec<RepositoryDescriptor>, ShowcaseError> {
        let per_page = self.params.per_page.to_string();
        let query_params = [
            ("type", self.params.kind.as_str()),
            ("sort", self.params.sort.as_str()),
            ("direction", self.params.direction.as_str()),
            ("per_page", per_page.as_str()),
        ];

        tracing::debug!(
            user = self.user.as_str(),
            per_page = self.params.per_page,
            "fetching repository listing"
        );

        let repositories: Vec<ApiRepository> = self
            .client
            .get(self.user.repos_path(), Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list repositories", &error))?;

        Ok(repositories
            .into_iter()
            .map(RepositoryDescriptor::from)
            .collect())
    }
}

fn validate_params(params: &ListRepositoriesParams) -> Result<(), ShowcaseError> {
    if params.per_page == 0 {
        return Err(ShowcaseError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if params.per_page > MAX_FETCH_LIMIT {
        return Err(ShowcaseError::InvalidPagination {
            message: format!("per_page must not exceed {MAX_FETCH_LIMIT}"),
        });
    }

    Ok(())
}
