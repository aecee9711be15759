//! Runtime configuration for the repository core.

use crate::error::{RepoError, Result};
use crate::query::pagination::Pagination;

/// Tunables consulted when normalizing list requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Page size used when a list request omits one or supplies a
    /// non-positive value.
    pub default_page_size: u32,
    /// Upper bound applied to requested page sizes, when set.
    pub max_page_size: Option<u32>,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            default_page_size: Pagination::DEFAULT_PAGE_SIZE,
            max_page_size: None,
        }
    }
}

impl RepoConfig {
    /// Build a configuration from the environment, falling back to
    /// defaults for anything unset.
    ///
    /// Reads `REPOLENS_DEFAULT_PAGE_SIZE` and `REPOLENS_MAX_PAGE_SIZE`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(size) = std::env::var("REPOLENS_DEFAULT_PAGE_SIZE") {
            config.default_page_size = size.parse().map_err(|e| {
                RepoError::configuration(format!("invalid REPOLENS_DEFAULT_PAGE_SIZE: {e}"))
            })?;
            if config.default_page_size == 0 {
                return Err(RepoError::configuration(
                    "REPOLENS_DEFAULT_PAGE_SIZE must be positive",
                ));
            }
        }

        if let Ok(max) = std::env::var("REPOLENS_MAX_PAGE_SIZE") {
            let max: u32 = max.parse().map_err(|e| {
                RepoError::configuration(format!("invalid REPOLENS_MAX_PAGE_SIZE: {e}"))
            })?;
            config.max_page_size = Some(max);
        }

        Ok(config)
    }
}
