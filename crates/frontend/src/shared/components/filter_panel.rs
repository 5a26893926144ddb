use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible filter form with an optional pagination slot
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Pagination controls shown in the header
    #[prop(optional, into)]
    pagination_controls: Option<ViewFn>,

    /// Clears every filter; the button shows only while filters are active
    #[prop(optional)]
    on_clear: Option<Callback<()>>,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>{icon("chevron-down")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                {on_clear.map(|on_clear| view! {
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <button class="button button--ghost" on:click=move |_| on_clear.run(())>
                            "Clear filters"
                        </button>
                    </Show>
                })}
                <div class="filter-panel-header__center">
                    {pagination_controls.map(|controls| controls.run())}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">{children()}</div>
            </div>
        </div>
    }
}
