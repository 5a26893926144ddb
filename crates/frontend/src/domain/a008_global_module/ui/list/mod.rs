use contracts::domain::a008_global_module::aggregate::GlobalPythonModule;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_global_module::api;
use crate::modals::delete_global_module::DeleteGlobalModuleProps;
use crate::shared::date_utils::format_datetime;
use crate::shared::feedback::use_feedback;
use crate::shared::list_state::{unpaged, ListLoader};
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SETTINGS};

#[component]
pub fn GlobalModulesListPage() -> impl IntoView {
    let feedback = use_feedback();
    let modal = feedback.modal();
    let list = ListLoader::<GlobalPythonModule>::new();

    Effect::new(move |_| {
        list.load(feedback, "Failed to load global modules", async move {
            api::list_global_modules().await.map(unpaged)
        });
    });

    let open_delete = move |module: GlobalPythonModule| {
        modal.show_modal(Modal::DeleteGlobalModule(DeleteGlobalModuleProps {
            module,
            on_deleted: Some(Callback::new(move |_| list.reload())),
        }));
    };

    let items = list.items_signal();
    let loading = list.loading();

    view! {
        <PageFrame page_id="global_modules--list" category=PAGE_CAT_SETTINGS>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Global Python Modules"</h1>
                    <Badge appearance=BadgeAppearance::Tint>{move || items.with(Vec::len)}</Badge>
                </div>
            </div>

            <div class="page__content">
                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Module"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Last Modified"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|module| module.id.clone()
                                children=move |module| {
                                    let for_delete = module.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{module.id.clone()}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{module.description.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_datetime(&module.last_modified)}</TableCell>
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
                    <div class="list-placeholder">"Loading global modules..."</div>
                </Show>
                <Show when=move || list.is_empty()>
                    <div class="list-placeholder">"No global modules defined"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
