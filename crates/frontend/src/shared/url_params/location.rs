use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use std::cell::RefCell;
use std::rc::Rc;

/// Where the URL parameter store reads and writes its query string.
pub trait LocationSource: Clone + 'static {
    /// Query string of the current location, with or without the leading `?`.
    /// Reactive implementations track the read.
    fn search(&self) -> String;

    /// Replaces the query string of the current location. No history entry is pushed.
    fn replace_search(&self, search: &str);
}

/// Browser location driven by `leptos_router`. Must be created inside `<Router>`.
#[derive(Clone, Copy)]
pub struct RouterLocation {
    pathname: Memo<String>,
    search: Memo<String>,
    hash: Memo<String>,
    navigate: StoredValue<Box<dyn Fn(&str, NavigateOptions)>, LocalStorage>,
}

impl RouterLocation {
    pub fn new() -> Self {
        let location = use_location();
        let navigate = use_navigate();
        Self {
            pathname: location.pathname,
            search: location.search,
            hash: location.hash,
            navigate: StoredValue::new_local(Box::new(navigate)),
        }
    }
}

impl LocationSource for RouterLocation {
    fn search(&self) -> String {
        self.search.get()
    }

    fn replace_search(&self, search: &str) {
        let url = replacement_url(
            &self.pathname.get_untracked(),
            search,
            &self.hash.get_untracked(),
        );
        self.navigate.with_value(|navigate| {
            navigate(
                &url,
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            )
        });
    }
}

/// Path, query and hash of the location that replaces the current one
pub fn replacement_url(pathname: &str, search: &str, hash: &str) -> String {
    let mut url = pathname.to_string();
    if !search.is_empty() {
        url.push('?');
        url.push_str(search);
    }
    let hash = hash.trim_start_matches('#');
    if !hash.is_empty() {
        url.push('#');
        url.push_str(hash);
    }
    url
}

/// In-memory location for tests and headless harnesses.
///
/// Keeps the list of history entries so callers can check that writes replace
/// the current entry instead of appending one.
#[derive(Clone, Default)]
pub struct MemoryLocation {
    entries: Rc<RefCell<Vec<String>>>,
}

impl MemoryLocation {
    pub fn new(initial_search: &str) -> Self {
        Self {
            entries: Rc::new(RefCell::new(vec![initial_search.to_string()])),
        }
    }

    /// Simulates a regular navigation that pushes a new entry
    pub fn push_search(&self, search: &str) {
        self.entries.borrow_mut().push(search.to_string());
    }

    pub fn history_len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl LocationSource for MemoryLocation {
    fn search(&self) -> String {
        self.entries.borrow().last().cloned().unwrap_or_default()
    }

    fn replace_search(&self, search: &str) {
        let mut entries = self.entries.borrow_mut();
        match entries.last_mut() {
            Some(current) => *current = search.to_string(),
            None => entries.push(search.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_url_keeps_hash() {
        assert_eq!(
            replacement_url("/detections", "page=2", "#top"),
            "/detections?page=2#top"
        );
        assert_eq!(replacement_url("/detections", "", "top"), "/detections#top");
        assert_eq!(replacement_url("/detections", "", ""), "/detections");
    }
}
