//! Row selection for bulk actions.
//!
//! [`SelectionSet`] is the plain data structure; [`SelectContext`] wraps it in
//! a signal and is provided by the page that owns the rows, so every checkbox
//! and bulk-action bar below it reads the same selection.

mod checkbox;
mod context;

pub use checkbox::{SelectAllCheckbox, SelectCheckbox};
pub use context::{provide_select_context, use_select, SelectContext};

use std::fmt;
use std::sync::Arc;

/// Identity used to compare selected items
pub trait Selectable {
    fn selection_key(&self) -> String;
}

impl Selectable for String {
    fn selection_key(&self) -> String {
        self.clone()
    }
}

pub type KeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

pub struct SelectionSet<T> {
    items: Vec<T>,
    key: KeyFn<T>,
}

impl<T: Selectable> SelectionSet<T> {
    pub fn new(initial: Vec<T>) -> Self {
        Self::with_key(initial, |item: &T| item.selection_key())
    }
}

impl<T> SelectionSet<T> {
    pub fn with_key(initial: Vec<T>, key: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self {
            items: initial,
            key: Arc::new(key),
        }
    }

    /// Appends without checking for duplicates
    pub fn select_item(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes every entry sharing the item's key
    pub fn deselect_item(&mut self, item: &T) {
        let key = (self.key)(item);
        let key_fn = Arc::clone(&self.key);
        self.items.retain(|selected| key_fn(selected) != key);
    }

    pub fn toggle_item(&mut self, item: T) {
        if self.check_if_selected(&item) {
            self.deselect_item(&item);
        } else {
            self.select_item(item);
        }
    }

    /// Replaces the selection with `items` as given
    pub fn select_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn reset_selection(&mut self) {
        self.items.clear();
    }

    pub fn check_if_selected(&self, item: &T) -> bool {
        let key = (self.key)(item);
        self.items.iter().any(|selected| (self.key)(selected) == key)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Header checkbox state for the given visible rows
    pub fn check_state(&self, available: &[T]) -> CheckState {
        if available.is_empty() {
            return CheckState::Unchecked;
        }
        let selected = available
            .iter()
            .filter(|item| self.check_if_selected(item))
            .count();
        if selected == 0 {
            CheckState::Unchecked
        } else if selected == available.len() {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }
}

impl<T: Clone> Clone for SelectionSet<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            key: Arc::clone(&self.key),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SelectionSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSet")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        revision: u32,
    }

    impl Selectable for Row {
        fn selection_key(&self) -> String {
            self.id.to_string()
        }
    }

    fn row(id: &'static str) -> Row {
        Row { id, revision: 1 }
    }

    #[test]
    fn test_toggle_parity() {
        let mut set = SelectionSet::new(vec![]);
        for n in 1..=5 {
            set.toggle_item(row("AWS.CloudTrail.Root"));
            assert_eq!(set.check_if_selected(&row("AWS.CloudTrail.Root")), n % 2 == 1);
        }
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_toggle_never_duplicates_keys() {
        let mut set = SelectionSet::new(vec![row("a")]);
        set.toggle_item(row("b"));
        set.toggle_item(row("a"));
        set.toggle_item(row("a"));
        let ids: Vec<_> = set.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_select_item_appends_without_uniqueness_check() {
        let mut set = SelectionSet::new(vec![row("a")]);
        set.select_item(row("a"));
        assert_eq!(set.len(), 2);

        // deselect removes every entry with that key
        set.deselect_item(&row("a"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_membership_is_by_key() {
        let set = SelectionSet::new(vec![row("a")]);
        assert!(set.check_if_selected(&Row { id: "a", revision: 7 }));
        assert!(!set.check_if_selected(&row("b")));
    }

    #[test]
    fn test_select_all_replaces_verbatim() {
        let mut set = SelectionSet::new(vec![row("old")]);
        set.select_all(vec![row("x"), row("y")]);
        assert!(set.check_if_selected(&row("x")));
        assert!(set.check_if_selected(&row("y")));
        assert!(!set.check_if_selected(&row("old")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_reset_selection_empties() {
        let mut set = SelectionSet::new(vec![row("a"), row("b")]);
        set.reset_selection();
        assert!(set.is_empty());
        assert!(!set.check_if_selected(&row("a")));
    }

    #[test]
    fn test_custom_key_function() {
        let mut set = SelectionSet::with_key(vec![], |r: &Row| format!("{}@{}", r.id, r.revision));
        set.select_item(row("a"));
        assert!(!set.check_if_selected(&Row { id: "a", revision: 2 }));
        assert!(set.check_if_selected(&row("a")));
    }

    #[test]
    fn test_string_items_use_themselves_as_key() {
        let mut set = SelectionSet::new(vec!["AWS.ALB".to_string()]);
        set.toggle_item("AWS.ALB".to_string());
        assert!(set.is_empty());
    }

    #[test]
    fn test_check_state() {
        let rows = vec![row("a"), row("b")];
        let mut set = SelectionSet::new(vec![]);
        assert_eq!(set.check_state(&rows), CheckState::Unchecked);
        set.select_item(row("a"));
        assert_eq!(set.check_state(&rows), CheckState::Indeterminate);
        set.select_item(row("b"));
        assert_eq!(set.check_state(&rows), CheckState::Checked);
        assert_eq!(set.check_state(&[]), CheckState::Unchecked);
    }
}
