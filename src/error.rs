//! Error types shared by the repository pipeline and its collaborators.

use thiserror::Error;

/// Errors surfaced while loading, paginating, or rendering the projects
/// section and its supporting resources.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShowcaseError {
    /// The listing endpoint was unreachable or answered with a non-success
    /// status. Rate limiting and decode failures land here too.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport or status detail, kept for logging only.
        message: String,
    },

    /// The fetch succeeded but no repositories remain after filtering.
    #[error("no public repositories found")]
    EmptyResult,

    /// A template failed to compile or render.
    #[error("render error: {message}")]
    Render {
        /// Template engine detail.
        message: String,
    },

    /// Listing parameters are outside the range the endpoint accepts.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// The GitHub login was blank.
    #[error("GitHub user is required")]
    InvalidUser,

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// A translation resource was missing or malformed.
    #[error("translation error: {message}")]
    Translation {
        /// Details about the translation failure.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}
