//! Error types for the cache layer
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache layer.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Resource type is not present in the registry
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    /// A query parameter cannot participate in canonical key serialization
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParam {
        /// Parameter name as supplied by the caller
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The caller-supplied remote call failed; the cache was left untouched
    #[error("Remote call failed: {0}")]
    Remote(#[source] anyhow::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache layer.
pub type Result<T> = std::result::Result<T, CacheError>;
