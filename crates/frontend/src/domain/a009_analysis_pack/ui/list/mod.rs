pub mod filters;
mod pack_card;
pub mod versions;

use contracts::domain::a009_analysis_pack::aggregate::{
    AnalysisPack, ListAnalysisPacksInput, UpdateAnalysisPackInput,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;
use thaw::*;

use self::filters::active_filter_count;
use self::pack_card::PackCard;
use crate::domain::a009_analysis_pack::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::{bool_options, FilterSelect};
use crate::shared::components::search_input::SearchInput;
use crate::shared::feedback::use_feedback;
use crate::shared::list_state::ListLoader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_params::use_request_params;
use crate::shared::url_params::{bool_code, select_bool_value};

/// Packs load in one request; updating a pack reloads the list
#[component]
pub fn AnalysisPacksListPage() -> impl IntoView {
    let params = use_request_params::<ListAnalysisPacksInput>();
    let feedback = use_feedback();
    let list = ListLoader::<AnalysisPack>::new();
    let is_filter_expanded = RwSignal::new(false);
    // id of the pack whose update is in flight
    let updating = RwSignal::new(None::<String>);

    let input = Memo::new(move |_| params.request_params());

    Effect::new(move |_| {
        let request = input.get();
        list.load(feedback, "Failed to load packs", async move {
            api::list_analysis_packs(&request)
                .await
                .map(|response| (response.packs, response.paging))
        });
    });

    let on_update = Callback::new(move |update: UpdateAnalysisPackInput| {
        if updating.get_untracked().is_some() {
            return;
        }
        updating.set(Some(update.id.clone()));
        spawn_local(async move {
            let result = api::update_analysis_pack(&update).await;
            updating.set(None);
            match result {
                Ok(pack) => {
                    feedback.success(format!("Updated Pack [{}] successfully", pack.id));
                    list.reload();
                }
                Err(err) => feedback.api_error("Failed to update Pack", &err),
            }
        });
    });

    let items = list.items_signal();
    let loading = list.loading();
    let filter_count = Signal::derive(move || input.with(active_filter_count));

    let clear_filters = Callback::new(move |_| {
        let current = input.get_untracked();
        params.set_request_params(json!({ "sortDir": current.sort_dir }));
    });

    view! {
        <PageFrame page_id="packs--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Packs"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || items.with(Vec::len)}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || input.with(|i| i.name_contains.clone().unwrap_or_default()))
                        placeholder="Search for a pack..."
                        on_search=Callback::new(move |text: String| {
                            params.update_request_params(json!({ "nameContains": text }))
                        })
                    />
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=filter_count
                    on_clear=clear_filters
                >
                    <Flex gap=FlexGap::Medium align=FlexAlign::End>
                        <FilterSelect
                            label="Enabled"
                            options=bool_options("Yes", "No")
                            value=Signal::derive(move || input.with(|i| bool_code(i.enabled).to_string()))
                            on_change=Callback::new(move |code: String| {
                                params.update_request_params(json!({ "enabled": select_bool_value(&code) }))
                            })
                        />
                        <FilterSelect
                            label="Update Available"
                            options=bool_options("Yes", "No")
                            value=Signal::derive(move || input.with(|i| bool_code(i.update_available).to_string()))
                            on_change=Callback::new(move |code: String| {
                                params.update_request_params(json!({ "updateAvailable": select_bool_value(&code) }))
                            })
                        />
                    </Flex>
                </FilterPanel>

                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="pack-list">
                    <For
                        each=move || items.get()
                        key=|pack| (pack.id.clone(), pack.pack_version.id, pack.enabled)
                        children=move |pack| {
                            let id = pack.id.clone();
                            let busy = Signal::derive(move || {
                                updating.with(|u| u.as_deref() == Some(id.as_str()))
                            });
                            view! { <PackCard pack=pack on_update=on_update busy=busy /> }
                        }
                    />
                </div>

                <Show when=move || loading.get() && items.with(Vec::is_empty)>
                    <div class="list-placeholder">"Loading packs..."</div>
                </Show>
                <Show when=move || list.is_empty()>
                    <div class="list-placeholder">
                        {move || if filter_count.get() > 0 {
                            "No packs match your filters"
                        } else {
                            "No packs installed"
                        }}
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
