pub mod filters;

use contracts::domain::a003_alert::aggregate::{
    AlertSortField, AlertStatus, AlertSummary, ListAlertsInput, UpdateAlertStatusInput,
};
use contracts::domain::common::Severity;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;
use thaw::*;

use self::filters::{active_filter_count, status_color, status_update_message, SORT_OPTIONS};
use crate::domain::a003_alert::api;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::FilterSelect;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::selection_bar::SelectionBar;
use crate::shared::components::severity_badge::SeverityBadge;
use crate::shared::components::sort_select::SortSelect;
use crate::shared::config::DEFAULT_PAGE_SIZE;
use crate::shared::date_utils::{format_count, format_datetime};
use crate::shared::feedback::use_feedback;
use crate::shared::list_state::ListLoader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_params::use_paged_request_params;
use crate::shared::select::{provide_select_context, SelectAllCheckbox, SelectCheckbox};
use crate::shared::sort_options::{label_for, SortOption};
use crate::shared::url_params::select_list_value;

#[component]
pub fn AlertsListPage() -> impl IntoView {
    let params = use_paged_request_params::<ListAlertsInput>();
    let feedback = use_feedback();
    let selection = provide_select_context::<AlertSummary>(Vec::new());
    let list = ListLoader::<AlertSummary>::new();
    let is_filter_expanded = RwSignal::new(false);
    let bulk_status = RwSignal::new(String::new());
    let updating = RwSignal::new(false);

    let input = Memo::new(move |_| params.request_params());

    Effect::new(move |_| {
        let mut request = input.get();
        request.page_size.get_or_insert(DEFAULT_PAGE_SIZE);
        selection.reset_selection();
        list.load(feedback, "Failed to load alerts", async move {
            api::list_alerts(&request)
                .await
                .map(|response| (response.alert_summaries, response.paging))
        });
    });

    let apply_status = move |_: ev::MouseEvent| {
        let Some(status) = AlertStatus::from_code(&bulk_status.get_untracked()) else {
            return;
        };
        let alert_ids: Vec<String> = selection
            .selection()
            .into_iter()
            .map(|alert| alert.alert_id)
            .collect();
        let count = alert_ids.len();
        let request = UpdateAlertStatusInput { alert_ids, status };
        updating.set(true);
        spawn_local(async move {
            match api::update_alert_status(&request).await {
                Ok(()) => {
                    feedback.success(status_update_message(count, status));
                    bulk_status.set(String::new());
                    list.reload();
                }
                Err(err) => feedback.api_error("Failed to update alerts", &err),
            }
            updating.set(false);
        });
    };

    let paging = list.paging();
    let loading = list.loading();
    let items = list.items_signal();
    let filter_count = Signal::derive(move || input.with(active_filter_count));
    let selected_count = Signal::derive(move || selection.len());

    let current_sort =
        Signal::derive(move || input.with(|i| label_for(SORT_OPTIONS, i.sort_by, i.sort_dir)));
    let on_sort = Callback::new(move |option: Option<SortOption<AlertSortField>>| {
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
        <PageFrame page_id="alerts--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Alerts"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || format_count(paging.get().total_items)}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || input.with(|i| i.name_contains.clone().unwrap_or_default()))
                        placeholder="Search alerts..."
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
                                input.with(|i| i.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
                            })
                            on_page_size_change=Callback::new(move |size: u32| {
                                params.update_request_params(json!({ "pageSize": size }))
                            })
                        />
                    }
                >
                    <Flex gap=FlexGap::Medium align=FlexAlign::End>
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
                            label="Status"
                            options={ AlertStatus::ALL.into_iter().map(|s| (s.code(), s.label())).collect() }
                            value=Signal::derive(move || input.with(|i| {
                                i.status.first().map(|s| s.code()).unwrap_or("").to_string()
                            }))
                            on_change=Callback::new(move |code: String| {
                                params.update_request_params(json!({ "status": select_list_value(&code) }))
                            })
                        />
                        <label class="form__group">
                            <span class="form__label">"Min Events"</span>
                            <SearchInput
                                value=Signal::derive(move || {
                                    input.with(|i| i.event_count_min.map(|n| n.to_string()).unwrap_or_default())
                                })
                                placeholder="0"
                                on_search=Callback::new(move |text: String| {
                                    let min = text.trim().parse::<u64>().ok();
                                    params.update_request_params(json!({ "eventCountMin": min }))
                                })
                            />
                        </label>
                    </Flex>
                </FilterPanel>

                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <SelectionBar count=selected_count>
                    <select
                        class="form__select"
                        aria-label="New status"
                        prop:value=move || bulk_status.get()
                        on:change=move |ev| bulk_status.set(event_target_value(&ev))
                    >
                        <option value="">"Set status..."</option>
                        {AlertStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        loading=updating
                        disabled=Signal::derive(move || bulk_status.with(String::is_empty))
                        on_click=apply_status
                    >
                        "Apply"
                    </Button>
                </SelectionBar>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell class="table__cell--checkbox">
                                    <SelectAllCheckbox items=items />
                                </TableHeaderCell>
                                <TableHeaderCell>"Title"</TableHeaderCell>
                                <TableHeaderCell>"Severity"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Log Types"</TableHeaderCell>
                                <TableHeaderCell>"Events"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|alert| alert.alert_id.clone()
                                children=move |alert| {
                                    let title = alert.title.clone();
                                    let severity = alert.severity;
                                    let status = alert.status;
                                    let log_types = alert.log_types.join(", ");
                                    let events = format_count(alert.event_count);
                                    let created = format_datetime(&alert.creation_time);
                                    view! {
                                        <TableRow>
                                            <TableCell class="table__cell--checkbox">
                                                <SelectCheckbox item=alert />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{title}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <SeverityBadge severity=severity />
                                            </TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
                                                    {status.label()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{log_types}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{events}</TableCell>
                                            <TableCell>{created}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <Show when=move || loading.get() && items.with(Vec::is_empty)>
                    <div class="list-placeholder">"Loading alerts..."</div>
                </Show>
                <Show when=move || list.is_empty()>
                    <div class="list-placeholder">"No alerts found"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
