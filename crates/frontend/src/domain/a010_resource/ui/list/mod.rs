pub mod filters;

use contracts::domain::a006_compliance_source::aggregate::ComplianceSource;
use contracts::domain::a010_resource::aggregate::{
    ComplianceStatus, ListResourcesInput, ResourceSortField, ResourceSummary, RESOURCE_TYPES,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;
use thaw::*;

use self::filters::{active_filter_count, source_label, SORT_OPTIONS};
use crate::domain::a006_compliance_source::api as sources_api;
use crate::domain::a010_resource::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::sort_select::SortSelect;
use crate::shared::config::DEFAULT_PAGE_SIZE;
use crate::shared::date_utils::{format_count, format_datetime};
use crate::shared::feedback::use_feedback;
use crate::shared::list_state::ListLoader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_params::use_paged_request_params;
use crate::shared::sort_options::{label_for, SortOption};
use crate::shared::url_params::select_list_value;

fn status_color(status: ComplianceStatus) -> BadgeColor {
    match status {
        ComplianceStatus::Pass => BadgeColor::Success,
        ComplianceStatus::Fail => BadgeColor::Danger,
        ComplianceStatus::Error => BadgeColor::Warning,
    }
}

#[component]
pub fn ResourcesListPage() -> impl IntoView {
    let params = use_paged_request_params::<ListResourcesInput>();
    let feedback = use_feedback();
    let list = ListLoader::<ResourceSummary>::new();
    let is_filter_expanded = RwSignal::new(false);
    let sources = RwSignal::new(Vec::<ComplianceSource>::new());

    let input = Memo::new(move |_| params.request_params());

    Effect::new(move |_| {
        let mut request = input.get();
        request.page_size.get_or_insert(DEFAULT_PAGE_SIZE);
        list.load(feedback, "Failed to load resources", async move {
            api::list_resources(&request)
                .await
                .map(|response| (response.resources, response.paging))
        });
    });

    // account labels only decorate the table, so a failure here is not reported
    spawn_local(async move {
        match sources_api::list_compliance_sources().await {
            Ok(list) => sources.set(list),
            Err(err) => log::warn!("resources: cloud accounts not loaded: {}", err),
        }
    });

    let paging = list.paging();
    let loading = list.loading();
    let items = list.items_signal();
    let filter_count = Signal::derive(move || input.with(active_filter_count));

    let current_sort =
        Signal::derive(move || input.with(|i| label_for(SORT_OPTIONS, i.sort_by, i.sort_dir)));
    let on_sort = Callback::new(move |option: Option<SortOption<ResourceSortField>>| {
        params.update_request_params(match option {
            Some(o) => json!({ "sortBy": o.sort_by, "sortDir": o.sort_dir }),
            None => json!({ "sortBy": null, "sortDir": null }),
        })
    });

    let clear_filters = Callback::new(move |_| {
        let current = input.get_untracked();
        params.set_request_params_and_reset_paging(json!({
            "sortBy": current.sort_by,
            "sortDir": current.sort_dir,
            "pageSize": current.page_size,
        }));
    });

    view! {
        <PageFrame page_id="resources--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Resources"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || format_count(paging.get().total_items)}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || input.with(|i| i.id_contains.clone().unwrap_or_default()))
                        placeholder="Search by ID / Name..."
                        on_search=Callback::new(move |text: String| {
                            params.update_request_params(json!({ "idContains": text }))
                        })
                    />
                    <SortSelect options=SORT_OPTIONS current=current_sort on_change=on_sort />
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=filter_count
                    on_clear=clear_filters
                    pagination_controls=move || view! {
                        <PaginationControls
                            paging=paging
                            on_page_change=Callback::new(move |page| params.update_paging_params(page))
                            page_size=Signal::derive(move || {
                                input.with(|i| i.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
                            })
                            on_page_size_change=Callback::new(move |size: u32| {
                                params.update_request_params(json!({ "pageSize": size }))
                            })
                            page_size_options=vec![25, 50, 100]
                        />
                    }
                >
                    <Flex gap=FlexGap::Medium align=FlexAlign::End>
                        <FilterSelect
                            label="Type"
                            options={ RESOURCE_TYPES.iter().map(|t| (*t, *t)).collect() }
                            value=Signal::derive(move || input.with(|i| i.types.first().cloned().unwrap_or_default()))
                            on_change=Callback::new(move |code: String| {
                                params.update_request_params(json!({ "types": select_list_value(&code) }))
                            })
                        />
                        <label class="form__group filter-select">
                            <span class="form__label">"Source"</span>
                            <select
                                class="form__select"
                                prop:value=move || input.with(|i| i.integration_id.clone().unwrap_or_default())
                                on:change=move |ev| {
                                    let id = event_target_value(&ev);
                                    params.update_request_params(json!({
                                        "integrationId": if id.is_empty() { None } else { Some(id) }
                                    }))
                                }
                            >
                                <option value="">"All"</option>
                                {move || sources.get()
                                    .into_iter()
                                    .map(|s| view! {
                                        <option value=s.integration_id>{s.integration_label}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <FilterSelect
                            label="Status"
                            options={ ComplianceStatus::ALL.into_iter().map(|s| (s.code(), s.label())).collect() }
                            value=Signal::derive(move || input.with(|i| {
                                i.compliance_status.map(|s| s.code()).unwrap_or("").to_string()
                            }))
                            on_change=Callback::new(move |code: String| {
                                params.update_request_params(json!({
                                    "complianceStatus": if code.is_empty() { None } else { Some(code) }
                                }))
                            })
                        />
                    </Flex>
                </FilterPanel>

                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Resource"</TableHeaderCell>
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <TableHeaderCell>"Source"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Last Modified"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|resource| resource.id.clone()
                                children=move |resource| {
                                    let id = resource.id.clone();
                                    let resource_type = resource.resource_type.clone();
                                    let integration_id = resource.integration_id.clone();
                                    let source = move || sources.with(|s| source_label(s, &integration_id));
                                    let status = resource.compliance_status;
                                    let modified = format_datetime(&resource.last_modified);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{resource_type}</TableCell>
                                            <TableCell>{source}</TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
                                                    {status.label()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>{modified}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || loading.get() && items.with(Vec::is_empty)>
                    <div class="list-placeholder">"Loading resources..."</div>
                </Show>
                <Show when=move || list.is_empty()>
                    <div class="list-placeholder">
                        {move || if filter_count.get() > 0 {
                            "No resources match your filters"
                        } else {
                            "No resources scanned yet"
                        }}
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
