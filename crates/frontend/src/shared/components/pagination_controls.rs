use crate::shared::icons::icon;
use contracts::shared::paging::PagingData;
use leptos::prelude::*;

/// PaginationControls component - first/previous/next/last over 1-indexed pages
///
/// The page size selector is rendered only when `on_page_size_change` is set.
#[component]
pub fn PaginationControls(
    /// Paging data as returned by the list endpoint
    #[prop(into)]
    paging: Signal<PagingData>,

    /// Called with the 1-indexed page to show
    on_page_change: Callback<u32>,

    #[prop(optional, into)]
    page_size: Option<Signal<u32>>,

    #[prop(optional)]
    on_page_size_change: Option<Callback<u32>>,

    /// Available page size options (defaults to [10, 25, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);
    let page_size = page_size.unwrap_or_else(|| Signal::derive(|| 0));

    let go_to = move |page: u32| {
        let current = paging.with_untracked(|p| p.this_page);
        if page != current {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go_to(1)
                disabled=move || !paging.with(has_previous)
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(paging.with_untracked(|p| p.this_page.saturating_sub(1).max(1)))
                disabled=move || !paging.with(has_previous)
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{move || paging.with(summary)}</span>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(paging.with_untracked(|p| (p.this_page + 1).min(p.total_pages.max(1))))
                disabled=move || !paging.with(has_next)
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(paging.with_untracked(|p| p.total_pages.max(1)))
                disabled=move || !paging.with(has_next)
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            {on_page_size_change.map(|on_change| view! {
                <select
                    class="page-size-select"
                    aria-label="Page size"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            on_change.run(size);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}

fn has_previous(paging: &PagingData) -> bool {
    paging.this_page > 1
}

fn has_next(paging: &PagingData) -> bool {
    paging.this_page < paging.total_pages
}

fn summary(paging: &PagingData) -> String {
    format!(
        "Page {} of {} ({} total)",
        paging.this_page,
        paging.total_pages.max(1),
        paging.total_items
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paging(this_page: u32, total_pages: u32) -> PagingData {
        PagingData {
            this_page,
            total_pages,
            total_items: total_pages as u64 * 25,
        }
    }

    #[test]
    fn test_bounds() {
        assert!(!has_previous(&paging(1, 3)));
        assert!(has_next(&paging(1, 3)));
        assert!(has_previous(&paging(3, 3)));
        assert!(!has_next(&paging(3, 3)));
        assert!(!has_next(&paging(1, 0)));
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary(&paging(2, 4)), "Page 2 of 4 (100 total)");
        assert_eq!(summary(&PagingData::default()), "Page 1 of 1 (0 total)");
    }
}
