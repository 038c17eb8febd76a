// Client configuration.
// Resolves API base URL and optional token from the environment.

use std::time::Duration;

use crate::error::{PopularError, Result};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "popular-repos";

/// Settings for the GitHub search client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without trailing slash.
    pub base_url: String,
    /// Optional bearer token. Search works unauthenticated at a lower rate limit.
    pub token: Option<String>,
    pub user_agent: String,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Point the client at a different API root (mock servers, GitHub Enterprise).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read `GITHUB_TOKEN` and `POPULAR_API_BASE` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(base) = get("POPULAR_API_BASE") {
            if !base.starts_with("http://") && !base.starts_with("https://") {
                return Err(PopularError::Config(format!(
                    "POPULAR_API_BASE must be an http(s) URL, got {}",
                    base
                )));
            }
            config = config.with_base_url(base);
        }
        if let Some(token) = get("GITHUB_TOKEN") {
            config = config.with_token(token);
        }
        Ok(config)
    }
}
