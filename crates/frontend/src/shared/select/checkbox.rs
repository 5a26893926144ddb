use super::{use_select, CheckState};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Row checkbox bound to the nearest selection of `T`
#[component]
pub fn SelectCheckbox<T>(item: T) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let selection = use_select::<T>();
    let item = StoredValue::new(item);
    let checked = Signal::derive(move || item.with_value(|i| selection.check_if_selected(i)));

    view! {
        <input
            type="checkbox"
            class="table__checkbox"
            aria-label=move || if checked.get() { "unselect item" } else { "select item" }
            prop:checked=checked
            on:click=|e| e.stop_propagation()
            on:change=move |_| selection.toggle_item(item.get_value())
        />
    }
}

/// Header checkbox selecting or clearing all of `items`
#[component]
pub fn SelectAllCheckbox<T>(#[prop(into)] items: Signal<Vec<T>>) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let selection = use_select::<T>();
    let state = Signal::derive(move || items.with(|all| selection.check_state(all)));
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only
    Effect::new(move |_| {
        let indeterminate = state.get() == CheckState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(indeterminate);
            }
        }
    });

    let all_selected = move || state.get() == CheckState::Checked;

    view! {
        <input
            node_ref=checkbox_ref
            type="checkbox"
            class="table__checkbox"
            aria-label=move || if all_selected() { "unselect all" } else { "select all" }
            prop:checked=all_selected
            on:change=move |_| {
                if state.get_untracked() == CheckState::Checked {
                    selection.reset_selection();
                } else {
                    selection.select_all(items.get_untracked());
                }
            }
        />
    }
}
