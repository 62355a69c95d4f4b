//! Error types for prompt resolution.
//!
//! These errors stay internal to the crate: `Resolver::resolve` absorbs every
//! one of them and degrades to the caller-supplied fallback. They exist so
//! absorbed failures can be logged with a meaningful category.

use thiserror::Error;

/// Failure modes of a prompt provider or its construction.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No provider could be located (no prompts file in any tier).
    #[error("no prompt provider available")]
    Unavailable,

    /// The provider's backing store could not be read.
    #[error("failed to read prompts config: {0}")]
    Io(#[from] std::io::Error),

    /// The provider's backing store could not be parsed.
    #[error("failed to parse prompts config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The config tree holds a non-string value where a prompt was expected.
    #[error("value at '{path}' is not a string")]
    Malformed { path: String },
}

impl ProviderError {
    pub fn malformed(segments: &[&str]) -> Self {
        Self::Malformed {
            path: segments.join("."),
        }
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
