use super::{CheckState, Selectable, SelectionSet};
use leptos::prelude::*;

/// Reactive handle to a page's selection
pub struct SelectContext<T: Send + Sync + 'static> {
    state: RwSignal<SelectionSet<T>>,
}

impl<T: Send + Sync + 'static> Clone for SelectContext<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for SelectContext<T> {}

impl<T> SelectContext<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(set: SelectionSet<T>) -> Self {
        Self {
            state: RwSignal::new(set),
        }
    }

    pub fn select_item(&self, item: T) {
        self.state.update(|s| s.select_item(item));
    }

    pub fn deselect_item(&self, item: &T) {
        self.state.update(|s| s.deselect_item(item));
    }

    pub fn toggle_item(&self, item: T) {
        self.state.update(|s| s.toggle_item(item));
    }

    pub fn select_all(&self, items: Vec<T>) {
        log::debug!("selection: select all ({})", items.len());
        self.state.update(|s| s.select_all(items));
    }

    pub fn reset_selection(&self) {
        self.state.update(|s| s.reset_selection());
    }

    pub fn check_if_selected(&self, item: &T) -> bool {
        self.state.with(|s| s.check_if_selected(item))
    }

    /// Tracked snapshot of the selected items
    pub fn selection(&self) -> Vec<T> {
        self.state.with(|s| s.items().to_vec())
    }

    pub fn len(&self) -> usize {
        self.state.with(|s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(|s| s.is_empty())
    }

    pub fn check_state(&self, available: &[T]) -> CheckState {
        self.state.with(|s| s.check_state(available))
    }
}

/// Creates a selection keyed by [`Selectable`] and provides it to descendants
pub fn provide_select_context<T>(initial: Vec<T>) -> SelectContext<T>
where
    T: Selectable + Clone + Send + Sync + 'static,
{
    let ctx = SelectContext::new(SelectionSet::new(initial));
    provide_context(ctx);
    ctx
}

pub fn use_select<T>() -> SelectContext<T>
where
    T: Clone + Send + Sync + 'static,
{
    expect_context::<SelectContext<T>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str);

    impl Selectable for Row {
        fn selection_key(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_provided_context_is_shared_with_descendants() {
        let owner = Owner::new();
        owner.with(|| {
            let page = provide_select_context(vec![Row("a")]);
            let checkbox = use_select::<Row>();

            checkbox.toggle_item(Row("b"));
            assert_eq!(page.selection(), vec![Row("a"), Row("b")]);

            page.toggle_item(Row("a"));
            assert!(!checkbox.check_if_selected(&Row("a")));
            assert_eq!(checkbox.len(), 1);

            checkbox.select_all(vec![Row("c"), Row("d")]);
            assert_eq!(page.check_state(&[Row("c"), Row("d")]), CheckState::Checked);

            page.reset_selection();
            assert!(checkbox.is_empty());
        });
    }
}
