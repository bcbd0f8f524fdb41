//! GitHub repository listing: source, descriptors, and exclusion filter.
//!
//! This module wraps Octocrab to fetch a user's public repositories in a
//! single anonymous request and converts the wire format into immutable
//! [`RepositoryDescriptor`] values. Failures of any kind surface as
//! [`ShowcaseError::Network`](crate::ShowcaseError::Network).

pub mod filter;
pub mod models;
pub mod source;
pub mod user;

pub use filter::RepositoryFilter;
pub use models::RepositoryDescriptor;
pub use source::{
    ListRepositoriesParams, MAX_FETCH_LIMIT, OctocrabRepositorySource, RepositorySource,
    RepositoryType, SortDirection, SortField,
};
pub use user::{DEFAULT_API_BASE, GitHubUser, parse_api_base};

#[cfg(test)]
pub use source::MockRepositorySource;
