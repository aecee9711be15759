//! Structured error handling for the repository core.
//!
//! Query-source failures are wrapped with the original error preserved as
//! the `source`; the core adds no retry logic. An empty result set or a
//! zero count is never an error.

use thiserror::Error;

/// Errors surfaced by the repository core.
#[derive(Error, Debug)]
pub enum RepoError {
    /// Builder or configuration misuse: missing default order,
    /// conditional-order name collision, malformed environment values.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Failure reported by the underlying query source, propagated
    /// unchanged.
    #[error("query source error: {source}")]
    Source {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An update targeted an entity id the source does not hold.
    #[error("entity not found: {id}")]
    NotFound { id: String },

    /// An insert carried an id the source already holds.
    #[error("duplicate entity id: {id}")]
    DuplicateId { id: String },
}

impl RepoError {
    /// Configuration error from any displayable message.
    pub fn configuration(message: impl Into<String>) -> Self {
        RepoError::Configuration {
            message: message.into(),
        }
    }

    /// Wrap a query-source failure.
    pub fn source(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        RepoError::Source {
            source: Box::new(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, RepoError>;
