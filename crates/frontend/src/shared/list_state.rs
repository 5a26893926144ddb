//! Loading state shared by the list pages.
//!
//! Every load takes a ticket; a response is applied only if its ticket is
//! still the latest, so a slow response for old filters never overwrites the
//! rows of newer ones.

use crate::shared::api_utils::ApiError;
use crate::shared::feedback::Feedback;
use contracts::shared::paging::PagingData;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub paging: PagingData,
    pub loading: bool,
    pub error: Option<String>,
    pub is_loaded: bool,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            paging: PagingData::default(),
            loading: false,
            error: None,
            is_loaded: false,
            generation: 0,
        }
    }
}

impl<T> ListState<T> {
    /// Marks a new load as in flight and returns its ticket
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Applies a finished load. Returns false when the ticket is stale.
    pub fn apply(&mut self, ticket: u64, result: Result<(Vec<T>, PagingData), String>) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.loading = false;
        self.is_loaded = true;
        match result {
            Ok((items, paging)) => {
                self.items = items;
                self.paging = paging;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Applies a finished load and hands its error back only if the load was
    /// still the latest one, so stale failures are never reported.
    pub fn settle<E>(
        &mut self,
        ticket: u64,
        result: Result<(Vec<T>, PagingData), E>,
        describe: impl FnOnce(&E) -> String,
    ) -> Option<E> {
        match result {
            Ok(rows) => {
                self.apply(ticket, Ok(rows));
                None
            }
            Err(err) => {
                let message = describe(&err);
                self.apply(ticket, Err(message)).then_some(err)
            }
        }
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.generation
    }

    /// Drops rows locally, ahead of the server confirming a delete
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        let removed = (before - self.items.len()) as u64;
        self.paging.total_items = self.paging.total_items.saturating_sub(removed);
    }
}

/// Paging data for a list the server returns in one piece
pub fn unpaged<T>(items: Vec<T>) -> (Vec<T>, PagingData) {
    let paging = PagingData {
        this_page: 1,
        total_pages: 1,
        total_items: items.len() as u64,
    };
    (items, paging)
}

/// Reactive wrapper around [`ListState`]
pub struct ListLoader<T: Send + Sync + 'static> {
    state: RwSignal<ListState<T>>,
    reload: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for ListLoader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListLoader<T> {}

impl<T: Clone + Send + Sync + 'static> ListLoader<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ListState::default()),
            reload: RwSignal::new(0),
        }
    }

    /// Runs `fetch` and stores its rows unless a newer load started meanwhile.
    /// Tracks the reload counter, so calling this inside an `Effect` reruns it on [`Self::reload`].
    pub fn load<F>(&self, feedback: Feedback, error_title: &'static str, fetch: F)
    where
        F: Future<Output = Result<(Vec<T>, PagingData), ApiError>> + 'static,
    {
        self.reload.track();
        let mut ticket = 0;
        self.state.update(|s| ticket = s.start());
        let state = self.state;
        spawn_local(async move {
            let result = fetch.await;
            let mut failure = None;
            state.update(|s| {
                if !s.is_current(ticket) {
                    log::debug!("dropped stale list response (ticket {})", ticket);
                }
                failure = s.settle(ticket, result, ApiError::user_message);
            });
            if let Some(err) = failure {
                feedback.api_error(error_title, &err);
            }
        });
    }

    pub fn reload(&self) {
        self.reload.update(|n| *n += 1);
    }

    pub fn remove_where(&self, predicate: impl Fn(&T) -> bool) {
        self.state.update(|s| s.remove_where(predicate));
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    pub fn items_signal(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn paging(&self) -> Signal<PagingData> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.paging.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    /// Loaded, no error and no rows
    pub fn is_empty(&self) -> bool {
        self.state
            .with(|s| s.is_loaded && s.error.is_none() && s.items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total_items: u64) -> PagingData {
        PagingData {
            this_page: 1,
            total_pages: 1,
            total_items,
        }
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = ListState::<&str>::default();
        let old = state.start();
        let new = state.start();

        assert!(state.apply(new, Ok((vec!["fresh"], page(1)))));
        assert!(!state.apply(old, Ok((vec!["stale"], page(1)))));
        assert_eq!(state.items, vec!["fresh"]);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_ticket_keeps_loading_flag() {
        let mut state = ListState::<&str>::default();
        let old = state.start();
        state.start();
        assert!(!state.apply(old, Ok((vec![], page(0)))));
        assert!(state.loading);
        assert!(!state.is_loaded);
    }

    #[test]
    fn test_error_keeps_previous_rows() {
        let mut state = ListState::<&str>::default();
        let t = state.start();
        state.apply(t, Ok((vec!["a"], page(1))));
        let t = state.start();
        state.apply(t, Err("boom".into()));
        assert_eq!(state.items, vec!["a"]);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_only_current_failure_is_reported() {
        let mut state = ListState::<&str>::default();
        let old = state.start();
        let new = state.start();

        let stale: Result<(Vec<&str>, PagingData), &str> = Err("old filters");
        assert_eq!(state.settle(old, stale, |e| e.to_string()), None);
        assert!(state.error.is_none());

        let current: Result<(Vec<&str>, PagingData), &str> = Err("down");
        assert_eq!(state.settle(new, current, |e| format!("server {e}")), Some("down"));
        assert_eq!(state.error.as_deref(), Some("server down"));
    }

    #[test]
    fn test_remove_where_adjusts_total() {
        let mut state = ListState::<&str>::default();
        let t = state.start();
        state.apply(t, Ok((vec!["a", "b", "c"], page(30))));
        state.remove_where(|item| *item != "b");
        assert_eq!(state.items, vec!["b"]);
        assert_eq!(state.paging.total_items, 28);
    }

    #[test]
    fn test_unpaged_counts_items() {
        let (items, paging) = unpaged(vec!["a", "b", "c"]);
        assert_eq!(items.len(), 3);
        assert_eq!(paging.total_items, 3);
        assert_eq!(paging.total_pages, 1);
    }
}
