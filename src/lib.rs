// Popular repositories browser.
// Fetch-or-reuse coordination for a per-language listing of the most starred GitHub repositories.

pub mod cache;
pub mod category;
pub mod config;
pub mod error;
pub mod fetch;
pub mod github;
pub mod state;

pub use cache::CategoryCache;
pub use category::Category;
pub use config::ClientConfig;
pub use error::{PopularError, Result};
pub use fetch::FetchClient;
pub use github::{GitHubClient, RepoRecord};
pub use state::{CategoryView, RenderModel, SelectionController, SessionState};
