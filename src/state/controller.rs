// Selection controller.
// Decides fetch-or-reuse on every category selection and applies fetch completions.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::category::Category;
use crate::error::{PopularError, Result};
use crate::fetch::FetchClient;
use crate::github::RepoRecord;

use super::render::RenderModel;
use super::session::SessionState;

/// User-visible message for any fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "There was an error fetching repos";

/// Outcome of one fetch, posted back to the controller.
#[derive(Debug)]
pub(crate) struct FetchCompletion {
    category: Category,
    outcome: Result<Vec<RepoRecord>>,
}

/// Owns the session state and coordinates fetches.
///
/// Fetches run as detached tokio tasks and are never cancelled. Their
/// results arrive on a single-consumer channel and are applied in arrival
/// order by [`process_pending`](Self::process_pending) or
/// [`next_completion`](Self::next_completion). A completion is applied
/// whatever the current selection is: late successes still populate the
/// cache, late failures still set the (global) error.
pub struct SelectionController<F: FetchClient> {
    fetcher: Arc<F>,
    state: SessionState,
    /// Categories with a fetch outstanding.
    in_flight: HashSet<Category>,
    completions_tx: mpsc::UnboundedSender<FetchCompletion>,
    completions_rx: mpsc::UnboundedReceiver<FetchCompletion>,
}

impl<F: FetchClient> SelectionController<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self::with_state(fetcher, SessionState::new())
    }

    /// Build a controller around an existing session.
    pub fn with_state(fetcher: Arc<F>, state: SessionState) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            fetcher,
            state,
            in_flight: HashSet::new(),
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn selected(&self) -> Category {
        self.state.selected
    }

    /// Whether a fetch for `category` is outstanding.
    pub fn in_flight(&self, category: Category) -> bool {
        self.in_flight.contains(&category)
    }

    /// Initial selection of the session's current category.
    pub fn start(&mut self) -> bool {
        self.select_category(self.state.selected)
    }

    /// Select `category`. Returns true if a fetch was issued.
    ///
    /// Must be called from within a tokio runtime.
    pub fn select_category(&mut self, category: Category) -> bool {
        self.state.selected = category;
        self.state.last_error = None;

        if self.state.cache.has(category) {
            tracing::debug!(%category, "Cache hit");
            return false;
        }
        if !self.in_flight.insert(category) {
            tracing::debug!(%category, "Fetch already in flight");
            return false;
        }

        tracing::debug!(%category, "Fetching popular repos");
        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            // A panicking fetch still reports, so the category leaves the in-flight set.
            let fetch = tokio::spawn(async move { fetcher.fetch(category).await });
            let outcome = match fetch.await {
                Ok(outcome) => outcome,
                Err(e) => Err(PopularError::TaskFailed(e.to_string())),
            };
            // The receiver lives as long as the controller.
            let _ = tx.send(FetchCompletion { category, outcome });
        });
        true
    }

    pub fn select_next(&mut self) -> bool {
        self.select_category(self.state.selected.next())
    }

    pub fn select_prev(&mut self) -> bool {
        self.select_category(self.state.selected.prev())
    }

    /// Apply a single fetch completion to the session.
    ///
    /// A category that is already cached keeps its list.
    fn apply_completion(&mut self, completion: FetchCompletion) {
        let FetchCompletion { category, outcome } = completion;
        self.in_flight.remove(&category);

        match outcome {
            Ok(_) if self.state.cache.has(category) => {
                tracing::debug!(%category, "Ignoring result for cached category");
            }
            Ok(records) => {
                tracing::info!(%category, count = records.len(), "Cached popular repos");
                self.state.cache.put(category, records);
            }
            Err(e) => {
                tracing::warn!(%category, error = %e, "Error fetching repos");
                self.state.last_error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Apply every completion already posted, without waiting. Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply_completion(completion);
            applied += 1;
        }
        applied
    }

    /// Wait for the next completion and apply it.
    ///
    /// Returns the category it concerned, or `None` when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Category> {
        if self.in_flight.is_empty() {
            return None;
        }
        let completion = self.completions_rx.recv().await?;
        let category = completion.category;
        self.apply_completion(completion);
        Some(category)
    }

    /// Derive the render model from the current session. No side effects.
    pub fn render_model(&self) -> RenderModel {
        let selected = self.state.selected;
        let cache = &self.state.cache;
        let error = self.state.last_error.clone();

        RenderModel {
            selected,
            is_loading: !cache.has(selected) && error.is_none(),
            items: cache.get(selected).ok(),
            fetched_at: cache.fetched_at(selected),
            error,
        }
    }
}
