// Render model handed to the presentation layer.
// A read-only snapshot derived from the session state.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::category::Category;
use crate::github::RepoRecord;

/// Snapshot of what the listing should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub selected: Category,
    /// No list for the selection yet and no error.
    pub is_loading: bool,
    /// Global error, not tied to the selected category.
    pub error: Option<String>,
    /// Cached list for the selection, if any.
    pub items: Option<Arc<[RepoRecord]>>,
    /// When the cached list for the selection was stored.
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Explicit view of the selected category. An error suppresses the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryView<'a> {
    Loading,
    Errored(&'a str),
    Loaded(&'a [RepoRecord]),
}

impl RenderModel {
    pub fn view(&self) -> CategoryView<'_> {
        match (&self.error, &self.items) {
            (Some(error), _) => CategoryView::Errored(error),
            (None, Some(items)) => CategoryView::Loaded(items),
            (None, None) => CategoryView::Loading,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, |items| items.len())
    }
}
