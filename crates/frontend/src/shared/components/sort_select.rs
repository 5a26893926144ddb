use crate::shared::sort_options::{find_by_label, SortOption};
use leptos::prelude::*;

/// Sort dropdown over a fixed set of named orders
#[component]
pub fn SortSelect<F>(
    options: &'static [SortOption<F>],
    /// Label of the active order, `None` when the list is unsorted
    #[prop(into)]
    current: Signal<Option<&'static str>>,
    on_change: Callback<Option<SortOption<F>>>,
) -> impl IntoView
where
    F: Copy + Send + Sync + 'static,
{
    view! {
        <select
            class="form__select sort-select"
            aria-label="Sort by"
            prop:value=move || current.get().unwrap_or("")
            on:change=move |ev| {
                let label = event_target_value(&ev);
                on_change.run(find_by_label(options, &label).copied());
            }
        >
            <option value="">"Sort by"</option>
            {options
                .iter()
                .map(|option| view! { <option value=option.label>{option.label}</option> })
                .collect_view()}
        </select>
    }
}
