// In-memory cache of fetched repository lists, keyed by category.
// Entries are never evicted or expired; the category set is small and fixed.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::category::Category;
use crate::error::{PopularError, Result};
use crate::github::RepoRecord;

/// Wrapper for cached data with metadata.
#[derive(Debug, Clone)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }
}

/// Ranked repository lists per category.
///
/// A key is present iff a fetch for it has succeeded during this session.
/// Lists are shared read-only with the presentation layer.
#[derive(Debug, Default)]
pub struct CategoryCache {
    entries: HashMap<Category, CachedData<Arc<[RepoRecord]>>>,
}

impl CategoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    /// Cached list for `category`. Callers check [`CategoryCache::has`] first.
    pub fn get(&self, category: Category) -> Result<Arc<[RepoRecord]>> {
        self.entries
            .get(&category)
            .map(|entry| Arc::clone(&entry.data))
            .ok_or(PopularError::NotCached(category))
    }

    /// Insert or overwrite the list for `category`.
    pub fn put(&mut self, category: Category, records: Vec<RepoRecord>) {
        self.entries
            .insert(category, CachedData::new(Arc::from(records)));
    }

    /// When the list for `category` was stored.
    pub fn fetched_at(&self, category: Category) -> Option<DateTime<Utc>> {
        self.entries.get(&category).map(|entry| entry.cached_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, stars: u64) -> RepoRecord {
        RepoRecord {
            owner_login: "owner".to_string(),
            owner_avatar_url: "https://avatars/owner".to_string(),
            html_url: url.to_string(),
            star_count: stars,
            fork_count: 0,
            open_issue_count: 0,
        }
    }

    #[test]
    fn test_put_then_get() {
        let mut cache = CategoryCache::new();
        assert!(!cache.has(Category::Ruby));

        cache.put(Category::Ruby, vec![record("u1", 10), record("u2", 5)]);

        assert!(cache.has(Category::Ruby));
        let list = cache.get(Category::Ruby).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].html_url, "u1");
        assert_eq!(list[1].html_url, "u2");
        assert!(cache.fetched_at(Category::Ruby).is_some());
    }

    #[test]
    fn test_get_absent_is_precondition_error() {
        let cache = CategoryCache::new();
        let err = cache.get(Category::Java).unwrap_err();
        assert!(matches!(err, PopularError::NotCached(Category::Java)));
        assert!(cache.fetched_at(Category::Java).is_none());
    }

    #[test]
    fn test_put_overwrites() {
        let mut cache = CategoryCache::new();
        cache.put(Category::All, vec![record("old", 1)]);
        cache.put(Category::All, vec![record("new", 2)]);

        assert_eq!(cache.get(Category::All).unwrap()[0].html_url, "new");
    }

    #[test]
    fn test_shared_list_survives_later_puts() {
        let mut cache = CategoryCache::new();
        cache.put(Category::Python, vec![record("p", 3)]);
        let shared = cache.get(Category::Python).unwrap();

        cache.put(Category::Css, vec![record("c", 1)]);

        assert_eq!(shared[0].html_url, "p");
        assert!(cache.has(Category::Css));
        assert!(cache.has(Category::Python));
    }
}
