//! CLI error types.

use nav_config::{ConfigError, ValidationError};
use nav_content::ContentError;
use nav_site::ResolveError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} warning(s) treated as errors (--strict)")]
    Strict(usize),
}
