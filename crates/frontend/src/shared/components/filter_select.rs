use leptos::prelude::*;

/// Labelled single-choice filter. The empty code stands for "any".
#[component]
pub fn FilterSelect(
    label: &'static str,
    /// `(code, label)` pairs, without the "any" entry
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form__group filter-select">
            <span class="form__label">{label}</span>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"All"</option>
                {options
                    .into_iter()
                    .map(|(code, text)| view! { <option value=code>{text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Options of a yes/no filter over a boolean parameter
pub fn bool_options(yes: &'static str, no: &'static str) -> Vec<(&'static str, &'static str)> {
    vec![("true", yes), ("false", no)]
}
