//! Error mapping helpers for the Octocrab repository source.
//!
//! Every failure collapses into [`ShowcaseError::Network`]; the message keeps
//! enough detail for logs while callers never branch on the cause.

use http::StatusCode;

use crate::error::ShowcaseError;

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ShowcaseError {
    let message = match error {
        octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => format!(
            "{operation} failed: rate limited ({status}): {message}",
            status = source.status_code,
            message = source.message
        ),
        octocrab::Error::GitHub { source, .. } => format!(
            "{operation} failed with status {status}: {message}",
            status = source.status_code,
            message = source.message
        ),
        other => format!("{operation} failed: {other}"),
    };

    ShowcaseError::Network { message }
}
