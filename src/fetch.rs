// Fetch seam between the selection controller and the data provider.

use std::future::Future;

use crate::category::Category;
use crate::error::Result;
use crate::github::RepoRecord;

/// Performs one request for a category's ranked repository list.
///
/// Implementations are stateless apart from connection reuse: no caching,
/// no retries, no partial results on failure. Records come back in the
/// provider's ranking (most starred first) and are not re-sorted.
pub trait FetchClient: Send + Sync + 'static {
    fn fetch(&self, category: Category) -> impl Future<Output = Result<Vec<RepoRecord>>> + Send;
}
