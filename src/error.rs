// Error types for the popular repositories browser.
// Covers GitHub API failures, precondition violations, and startup errors.

use thiserror::Error;

use crate::category::Category;

#[derive(Error, Debug)]
pub enum PopularError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Search response carried no items: {0}")]
    MissingItems(String),

    #[error("Fetch task failed: {0}")]
    TaskFailed(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("No cached repositories for {0}")]
    NotCached(Category),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PopularError>;
