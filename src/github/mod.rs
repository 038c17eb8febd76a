// GitHub API module.
// Provides the search client and the wire types it decodes.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use endpoints::search_query;
pub use types::{Owner, RepoRecord, Repository, SearchResponse};
