use contracts::domain::a007_custom_log::aggregate::CustomLogRecord;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a007_custom_log::api;
use crate::modals::delete_custom_log::DeleteCustomLogProps;
use crate::shared::feedback::use_feedback;
use crate::shared::list_state::{unpaged, ListLoader};
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn CustomLogsListPage() -> impl IntoView {
    let feedback = use_feedback();
    let modal = feedback.modal();
    let list = ListLoader::<CustomLogRecord>::new();

    Effect::new(move |_| {
        list.load(feedback, "Failed to load custom schemas", async move {
            api::list_custom_logs().await.map(unpaged)
        });
    });

    let open_delete = move |custom_log: CustomLogRecord| {
        modal.show_modal(Modal::DeleteCustomLog(DeleteCustomLogProps {
            custom_log,
            on_deleted: Some(Callback::new(move |_| list.reload())),
        }));
    };

    let items = list.items_signal();
    let loading = list.loading();

    view! {
        <PageFrame page_id="custom_logs--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Custom Schemas"</h1>
                    <Badge appearance=BadgeAppearance::Tint>{move || items.with(Vec::len)}</Badge>
                </div>
            </div>

            <div class="page__content">
                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Log Type"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Reference"</TableHeaderCell>
                                <TableHeaderCell>"Revision"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|record| format!("{}:{}", record.log_type, record.revision)
                                children=move |record| {
                                    let for_delete = record.clone();
                                    let reference = record.reference_url.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{record.log_type.clone()}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{record.description.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {(!reference.is_empty()).then(|| view! {
                                                    <a class="table__link" href=reference.clone() target="_blank" rel="noopener noreferrer">
                                                        "Link"
                                                    </a>
                                                })}
                                            </TableCell>
                                            <TableCell>{record.revision}</TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| open_delete(for_delete.clone())
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
                    <div class="list-placeholder">"Loading custom schemas..."</div>
                </Show>
                <Show when=move || list.is_empty()>
                    <div class="list-placeholder">"No custom schemas yet"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
