pub mod filters;

use contracts::domain::a002_data_model::aggregate::{
    DataModel, DataModelSortField, ListDataModelsInput,
};
use leptos::prelude::*;
use serde_json::json;
use thaw::*;

use self::filters::{active_filter_count, SORT_OPTIONS};
use crate::domain::a002_data_model::api;
use crate::modals::delete_data_models::DeleteDataModelsProps;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::{bool_options, FilterSelect};
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::selection_bar::SelectionBar;
use crate::shared::components::sort_select::SortSelect;
use crate::shared::date_utils::format_datetime;
use crate::shared::feedback::use_feedback;
use crate::shared::list_state::ListLoader;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::request_params::use_request_params;
use crate::shared::select::{provide_select_context, SelectAllCheckbox, SelectCheckbox};
use crate::shared::sort_options::{label_for, SortOption};
use crate::shared::url_params::{bool_code, select_bool_value, select_list_value};

/// Data models load in one request; filters and sort still live in the URL
#[component]
pub fn DataModelsListPage() -> impl IntoView {
    let params = use_request_params::<ListDataModelsInput>();
    let feedback = use_feedback();
    let modal = feedback.modal();
    let selection = provide_select_context::<DataModel>(Vec::new());
    let list = ListLoader::<DataModel>::new();
    let is_filter_expanded = RwSignal::new(false);

    let input = Memo::new(move |_| params.request_params());

    Effect::new(move |_| {
        let request = input.get();
        selection.reset_selection();
        list.load(feedback, "Failed to load data models", async move {
            api::list_data_models(&request)
                .await
                .map(|response| (response.models, response.paging))
        });
    });

    let open_delete = move |data_models: Vec<DataModel>| {
        let ids: Vec<String> = data_models.iter().map(|m| m.id.clone()).collect();
        modal.show_modal(Modal::DeleteDataModels(DeleteDataModelsProps {
            data_models,
            on_delete: Some(Callback::new(move |_| {
                selection.reset_selection();
                list.remove_where(|m| ids.contains(&m.id));
            })),
            on_settled: Some(Callback::new(move |_| list.reload())),
        }));
    };

    let items = list.items_signal();
    let loading = list.loading();
    let filter_count = Signal::derive(move || input.with(active_filter_count));
    let selected_count = Signal::derive(move || selection.len());

    let current_sort =
        Signal::derive(move || input.with(|i| label_for(SORT_OPTIONS, i.sort_by, i.sort_dir)));
    let on_sort = Callback::new(move |option: Option<SortOption<DataModelSortField>>| {
        params.update_request_params(match option {
            Some(o) => json!({ "sortBy": o.sort_by, "sortDir": o.sort_dir }),
            None => json!({ "sortBy": null, "sortDir": null }),
        })
    });

    let clear_filters = Callback::new(move |_| {
        let current = input.get_untracked();
        params.set_request_params(json!({
            "sortBy": current.sort_by,
            "sortDir": current.sort_dir,
        }));
    });

    view! {
        <PageFrame page_id="data_models--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Data Models"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || items.with(Vec::len)}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || input.with(|i| i.name_contains.clone().unwrap_or_default()))
                        placeholder="Search data models..."
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
                >
                    <Flex gap=FlexGap::Medium align=FlexAlign::End>
                        <FilterSelect
                            label="Enabled"
                            options=bool_options("Enabled", "Disabled")
                            value=Signal::derive(move || input.with(|i| bool_code(i.enabled).to_string()))
                            on_change=Callback::new(move |code: String| {
                                params.update_request_params(json!({ "enabled": select_bool_value(&code) }))
                            })
                        />
                        <label class="form__group">
                            <span class="form__label">"Log Type"</span>
                            <SearchInput
                                value=Signal::derive(move || input.with(|i| i.log_types.first().cloned().unwrap_or_default()))
                                placeholder="e.g. AWS.ALB"
                                on_search=Callback::new(move |log_type: String| {
                                    params.update_request_params(json!({ "logTypes": select_list_value(log_type.trim()) }))
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
                                <TableHeaderCell>"Display Name"</TableHeaderCell>
                                <TableHeaderCell>"Id"</TableHeaderCell>
                                <TableHeaderCell>"Log Types"</TableHeaderCell>
                                <TableHeaderCell>"Enabled"</TableHeaderCell>
                                <TableHeaderCell>"Last Modified"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|model| model.id.clone()
                                children=move |model| {
                                    let title = model.title().to_string();
                                    let id = model.id.clone();
                                    let log_types = model.log_types.join(", ");
                                    let enabled = if model.enabled { "Enabled" } else { "Disabled" };
                                    let modified = format_datetime(&model.last_modified);
                                    let for_select = model.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell class="table__cell--checkbox">
                                                <SelectCheckbox item=for_select />
                                            </TableCell>
                                            <TableCell>{title}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{log_types}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{enabled}</TableCell>
                                            <TableCell>{modified}</TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| open_delete(vec![model.clone()])
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
                    <div class="list-placeholder">"Loading data models..."</div>
                </Show>
                <Show when=move || list.is_empty()>
                    <div class="list-placeholder">"No data models found"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
