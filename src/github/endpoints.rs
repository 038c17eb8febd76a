// GitHub API endpoint functions.
// Popularity-ranked repository search, one request per category.

use crate::category::Category;
use crate::error::{PopularError, Result};
use crate::fetch::FetchClient;

use super::client::GitHubClient;
use super::types::{RepoRecord, SearchResponse};

/// Search qualifier for a category, e.g. `stars:>1 language:Ruby`.
pub fn search_query(category: Category) -> String {
    match category.language() {
        Some(language) => format!("stars:>1 language:{}", language),
        None => "stars:>1".to_string(),
    }
}

impl GitHubClient {
    /// Get the most starred repositories for a category, most popular first.
    pub async fn get_popular_repos(&self, category: Category) -> Result<Vec<RepoRecord>> {
        let query = search_query(category);
        let params = [
            ("q", query.as_str()),
            ("sort", "stars"),
            ("order", "desc"),
            ("type", "Repositories"),
        ];
        let response = self
            .get_with_params("/search/repositories", &params)
            .await?;
        let body = response.bytes().await?;
        let search: SearchResponse = serde_json::from_slice(&body)?;

        match search.items {
            Some(items) => Ok(items.into_iter().map(RepoRecord::from).collect()),
            None => Err(PopularError::MissingItems(
                search.message.unwrap_or_else(|| "no message".to_string()),
            )),
        }
    }
}

impl FetchClient for GitHubClient {
    async fn fetch(&self, category: Category) -> Result<Vec<RepoRecord>> {
        self.get_popular_repos(category).await
    }
}
