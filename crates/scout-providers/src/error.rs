//! Provider error types.

use thiserror::Error;

/// Errors that can occur when calling an external provider. All of them
/// are recovered locally — the pipeline maps them to degraded outcomes.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider returned a 429 Too Many Requests response.
    #[error("rate limited — retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// No endpoint/key configured for live calls.
    #[error("provider '{provider}' is not configured")]
    NotConfigured { provider: &'static str },
}
