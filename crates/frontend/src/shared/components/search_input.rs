use crate::shared::config::FILTER_DEBOUNCE_MS;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Text in the box and the term last written to the URL
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub text: String,
    pub last_sent: String,
}

impl SearchState {
    pub fn new(url_value: &str) -> Self {
        Self {
            text: url_value.to_string(),
            last_sent: url_value.to_string(),
        }
    }

    /// Follow the URL when it changes under the box. Returns true when the text was replaced.
    pub fn sync(&mut self, url_value: &str) -> bool {
        self.last_sent = url_value.to_string();
        if self.text == url_value {
            return false;
        }
        self.text = url_value.to_string();
        true
    }

    /// Typing paused on `text`; the term to write, if it differs from the URL
    pub fn settle(&mut self, text: &str) -> Option<String> {
        self.text = text.to_string();
        if self.last_sent == text {
            return None;
        }
        self.last_sent = text.to_string();
        Some(text.to_string())
    }
}

/// Text filter bound to a URL value; reports typing after it pauses
#[component]
pub fn SearchInput(
    /// Current value of the filter in the URL
    #[prop(into)]
    value: Signal<String>,
    on_search: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let initial = value.get_untracked();
    let text = RwSignal::new(initial.clone());
    let state = StoredValue::new(SearchState::new(&initial));
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let url_value = value.get();
        if state.try_update_value(|s| s.sync(&url_value)) == Some(true) {
            text.set(url_value);
        }
    });

    Effect::new(move |_| {
        let current = text.get();
        generation.update_value(|g| *g += 1);
        let this_generation = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(FILTER_DEBOUNCE_MS).await;
            // a newer keystroke superseded this one
            if generation.try_get_value() != Some(this_generation) {
                return;
            }
            if let Some(Some(term)) = state.try_update_value(|s| s.settle(&current)) {
                on_search.run(term);
            }
        });
    });

    view! {
        <div class="search-input">
            <Input value=text placeholder=placeholder.unwrap_or_else(|| "Search...".to_string()) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_url_resets_box_and_allows_same_term_again() {
        let mut state = SearchState::new("foo");
        assert!(state.sync(""));
        assert_eq!(state.text, "");
        assert_eq!(state.settle("foo"), Some("foo".to_string()));
    }

    #[test]
    fn test_settle_skips_term_already_in_url() {
        let mut state = SearchState::new("foo");
        assert_eq!(state.settle("foo"), None);
        assert_eq!(state.settle("bar"), Some("bar".to_string()));
        // the write comes back through the URL without touching the box
        assert!(!state.sync("bar"));
        assert_eq!(state.text, "bar");
    }
}
