// GitHub API response types.
// Wire shapes for the repository search endpoint and the ranked record built from them.

use serde::{Deserialize, Serialize};

/// Repository owner as returned inside search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
}

/// One repository from the search endpoint. Only the fields the listing uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub owner: Owner,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks: u64,
    pub open_issues: u64,
}

/// Body of `GET /search/repositories`.
///
/// Error bodies share the endpoint but carry `message` instead of `items`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub items: Option<Vec<Repository>>,
    pub message: Option<String>,
}

/// A ranked repository as shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub owner_login: String,
    pub owner_avatar_url: String,
    /// Unique within a result list.
    pub html_url: String,
    pub star_count: u64,
    pub fork_count: u64,
    pub open_issue_count: u64,
}

impl RepoRecord {
    /// Profile page of the owner.
    pub fn owner_profile_url(&self) -> String {
        format!("https://github.com/{}", self.owner_login)
    }
}

impl From<Repository> for RepoRecord {
    fn from(repo: Repository) -> Self {
        Self {
            owner_login: repo.owner.login,
            owner_avatar_url: repo.owner.avatar_url,
            html_url: repo.html_url,
            star_count: repo.stargazers_count,
            fork_count: repo.forks,
            open_issue_count: repo.open_issues,
        }
    }
}
