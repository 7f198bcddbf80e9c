//! Crate-level error types.
//!
//! [`CoinwatchError`] unifies every error source (configuration, HTTP,
//! JSON, terminal) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator for easy
//! propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CoinwatchError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum CoinwatchError {
    /// Configuration could not be read or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP request failed, either at the transport level or with a
    /// non-success status code.
    #[error("market data request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal setup, rendering, or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(String),
}
