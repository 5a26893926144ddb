use leptos::prelude::*;

/// Bulk action bar shown while at least one row is selected
#[component]
pub fn SelectionBar(
    #[prop(into)] count: Signal<usize>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || { count.get() > 0 }>
            <div class="selection-bar">
                <span class="selection-bar__count">{move || format!("{} Selected", count.get())}</span>
                <div class="selection-bar__actions">{children()}</div>
            </div>
        </Show>
    }
}
