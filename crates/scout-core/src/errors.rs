//! Cross-cutting error types for Scout.
//!
//! Domain-specific errors (e.g., `ProviderError`, `ConfigError`) are defined
//! in their respective crates. Per the degradation policy, the report
//! pipeline itself never surfaces these to a caller — they exist for the
//! seams where input genuinely cannot be interpreted.

use thiserror::Error;

/// Errors that can be raised by any Scout crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value outside its closed enum (e.g., an unknown opportunity type).
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
