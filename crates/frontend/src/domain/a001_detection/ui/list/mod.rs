pub mod filters;

use contracts::domain::a001_detection::aggregate::{
    Detection, DetectionSortField, DetectionType, ListDetectionsInput,
};
use contracts::domain::common::Severity;
use leptos::prelude::*;
use serde_json::json;
use thaw::*;

use self::filters::{active_filter_count, type_code, SORT_OPTIONS};
use crate::domain::a001_detection::api;
use crate::modals::delete_detections::DeleteDetectionsProps;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::{bool_options, FilterSelect};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::selection_bar::SelectionBar;
use crate::shared::components::severity_badge::SeverityBadge;
use crate::shared::components::sort_select::SortSelect;
use crate::shared::config::DEFAULT_SMALL_PAGE_SIZE;
use crate::shared::date_utils::{format_count, format_datetime};
use crate::shared::feedback::use_feedback;
use crate::shared::list_state::ListLoader;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_params::use_paged_request_params;
use crate::shared::select::{provide_select_context, SelectAllCheckbox, SelectCheckbox};
use crate::shared::sort_options::{label_for, SortOption};
use crate::shared::url_params::{bool_code, select_bool_value, select_list_value};

#[component]
pub fn DetectionsListPage() -> impl IntoView {
    let params = use_paged_request_params::<ListDetectionsInput>();
    let feedback = use_feedback();
    let modal = feedback.modal();
    let selection = provide_select_context::<Detection>(Vec::new());
    let list = ListLoader::<Detection>::new();
    let is_filter_expanded = RwSignal::new(false);

    let input = Memo::new(move |_| params.request_params());

    Effect::new(move |_| {
        let mut request = input.get();
        request.page_size.get_or_insert(DEFAULT_SMALL_PAGE_SIZE);
        selection.reset_selection();
        list.load(feedback, "Failed to load detections", async move {
            api::list_detections(&request)
                .await
                .map(|response| (response.detections, response.paging))
        });
    });

    let open_delete = move |detections: Vec<Detection>| {
        let ids: Vec<String> = detections.iter().map(|d| d.id.clone()).collect();
        modal.show_modal(Modal::DeleteDetections(DeleteDetectionsProps {
            detections,
            on_success: Some(Callback::new(move |_| {
                selection.reset_selection();
                list.remove_where(|d| ids.contains(&d.id));
            })),
            on_settled: Some(Callback::new(move |_| list.reload())),
        }));
    };

    let paging = list.paging();
    let loading = list.loading();
    let items = list.items_signal();
    let filter_count = Signal::derive(move || input.with(active_filter_count));
    let selected_count = Signal::derive(move || selection.len());

    let current_sort =
        Signal::derive(move || input.with(|i| label_for(SORT_OPTIONS, i.sort_by, i.sort_dir)));
    let on_sort = Callback::new(move |option: Option<SortOption<DetectionSortField>>| {
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
        <PageFrame page_id="detections--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Detections"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || format_count(paging.get().total_items)}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || input.with(|i| i.name_contains.clone().unwrap_or_default()))
                        placeholder="Search detections..."
                        on_search=Callback::new(move |text: String| {
                            params.update_request_params(json!({ "nameContains": text }))
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
                                input.with(|i| i.page_size.unwrap_or(DEFAULT_SMALL_PAGE_SIZE))
                            })
                            on_page_size_change=Callback::new(move |size: u32| {
                                params.update_request_params(json!({ "pageSize": size }))
                            })
                            page_size_options=vec![10, 25, 50]
                        />
                    }
                >
                    <Flex gap=FlexGap::Medium align=FlexAlign::End>
                        <FilterSelect
                            label="Type"
                            options={
                                [DetectionType::Rule, DetectionType::Policy]
                                    .into_iter()
                                    .map(|t| (type_code(t), t.label()))
                                    .collect()
                            }
                            value=Signal::derive(move || input.with(|i| {
                                i.analysis_types.first().map(|t| type_code(*t)).unwrap_or("").to_string()
                            }))
                            on_change=Callback::new(move |code: String| {
                                params.update_request_params(json!({ "analysisTypes": select_list_value(&code) }))
                            })
                        />
                        <FilterSelect
                            label="Severity"
                            options={ Severity::ALL.into_iter().map(|s| (s.code(), s.label())).collect() }
                            value=Signal::derive(move || input.with(|i| {
                                i.severity.first().map(|s| s.code()).unwrap_or("").to_string()
                            }))
                            on_change=Callback::new(move |code: String| {
                                params.update_request_params(json!({ "severity": select_list_value(&code) }))
                            })
                        />
                        <FilterSelect
                            label="Enabled"
                            options=bool_options("Yes", "No")
                            value=Signal::derive(move || input.with(|i| bool_code(i.enabled).to_string()))
                            on_change=Callback::new(move |code: String| {
                                params.update_request_params(json!({ "enabled": select_bool_value(&code) }))
                            })
                        />
                        <label class="form__group">
                            <span class="form__label">"Tag"</span>
                            <SearchInput
                                value=Signal::derive(move || input.with(|i| i.tags.first().cloned().unwrap_or_default()))
                                placeholder="Any tag"
                                on_search=Callback::new(move |tag: String| {
                                    params.update_request_params(json!({ "tags": select_list_value(tag.trim()) }))
                                })
                            />
                        </label>
                    </Flex>
                </FilterPanel>

                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <SelectionBar count=selected_count>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_delete(selection.selection())
                    >
                        "Delete"
                    </Button>
                </SelectionBar>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell class="table__cell--checkbox">
                                    <SelectAllCheckbox items=items />
                                </TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <TableHeaderCell>"Targets"</TableHeaderCell>
                                <TableHeaderCell>"Severity"</TableHeaderCell>
                                <TableHeaderCell>"Enabled"</TableHeaderCell>
                                <TableHeaderCell>"Last Modified"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|detection| detection.id.clone()
                                children=move |detection| {
                                    let title = detection.title().to_string();
                                    let type_label = detection.analysis_type.label();
                                    let targets = detection.targets().join(", ");
                                    let severity = detection.severity;
                                    let enabled = if detection.enabled { "Enabled" } else { "Disabled" };
                                    let modified = format_datetime(&detection.last_modified);
                                    let for_select = detection.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell class="table__cell--checkbox">
                                                <SelectCheckbox item=for_select />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{title}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{type_label}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{targets}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <SeverityBadge severity=severity />
                                            </TableCell>
                                            <TableCell>{enabled}</TableCell>
                                            <TableCell>{modified}</TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| open_delete(vec![detection.clone()])
                                                >
                                                    "Delete"
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || loading.get() && items.with(Vec::is_empty)>
                    <div class="list-placeholder">"Loading detections..."</div>
                </Show>
                <Show when=move || list.is_empty()>
                    <div class="list-placeholder">
                        {move || if filter_count.get() > 0 {
                            "No detections match your filters"
                        } else {
                            "You have not created any detections yet"
                        }}
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
