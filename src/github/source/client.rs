//! Octocrab client construction for the listing endpoint.

use http::Uri;
use octocrab::Octocrab;
use octocrab::service::middleware::retry::RetryConfig;
use url::Url;

use crate::error::ShowcaseError;

use super::error_mapping::map_octocrab_error;

/// Builds an anonymous Octocrab client for the given API base URL.
///
/// Automatic retries are disabled: a failed listing surfaces exactly once.
///
/// # Errors
///
/// Returns `ShowcaseError::InvalidUrl` when the base URI cannot be parsed or
/// `ShowcaseError::Network` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(api_base: &Url) -> Result<Octocrab, ShowcaseError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| ShowcaseError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|error| ShowcaseError::InvalidUrl(format!("build client failed: {error}")))?
        .add_retry_config(RetryConfig::None)
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
