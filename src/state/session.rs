// Session state owned by the selection controller.

use crate::cache::CategoryCache;
use crate::category::Category;

/// Everything the listing remembers for the lifetime of one UI session.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Currently selected category.
    pub selected: Category,
    /// Successfully fetched lists.
    pub cache: CategoryCache,
    /// Last fetch failure message, cleared on every selection.
    pub last_error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session starting on `selected` instead of the default category.
    pub fn starting_at(selected: Category) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }
}
