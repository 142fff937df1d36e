// Error types for langstat.
// Covers GitHub API errors, cache errors, and configuration preconditions.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangstatError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("Missing GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("Missing GITHUB_USER environment variable")]
    MissingUsername,

    #[error("GITHUB_USER is still set to the placeholder value; set it to your GitHub username")]
    PlaceholderUsername,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LangstatError>;
