use contracts::domain::a006_compliance_source::aggregate::ComplianceSource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_compliance_source::api;
use crate::modals::delete_compliance_source::DeleteComplianceSourceProps;
use crate::shared::date_utils::format_datetime;
use crate::shared::feedback::use_feedback;
use crate::shared::list_state::{unpaged, ListLoader};
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "Enabled"
    } else {
        "Disabled"
    }
}

#[component]
pub fn ComplianceSourcesListPage() -> impl IntoView {
    let feedback = use_feedback();
    let modal = feedback.modal();
    let list = ListLoader::<ComplianceSource>::new();

    Effect::new(move |_| {
        list.load(feedback, "Failed to load cloud accounts", async move {
            api::list_compliance_sources().await.map(unpaged)
        });
    });

    let open_delete = move |source: ComplianceSource| {
        modal.show_modal(Modal::DeleteComplianceSource(DeleteComplianceSourceProps {
            source,
            on_deleted: Some(Callback::new(move |_| list.reload())),
        }));
    };

    let items = list.items_signal();
    let loading = list.loading();

    view! {
        <PageFrame page_id="cloud_accounts--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Cloud Accounts"</h1>
                    <Badge appearance=BadgeAppearance::Tint>{move || items.with(Vec::len)}</Badge>
                </div>
            </div>

            <div class="page__content">
                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Label"</TableHeaderCell>
                                <TableHeaderCell>"AWS Account ID"</TableHeaderCell>
                                <TableHeaderCell>"Real-Time Updates"</TableHeaderCell>
                                <TableHeaderCell>"Auto Remediation"</TableHeaderCell>
                                <TableHeaderCell>"Date Created"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|source| source.integration_id.clone()
                                children=move |source| {
                                    let for_delete = source.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{source.integration_label.clone()}</TableCell>
                                            <TableCell>{source.aws_account_id.clone()}</TableCell>
                                            <TableCell>{on_off(source.cwe_enabled)}</TableCell>
                                            <TableCell>{on_off(source.remediation_enabled)}</TableCell>
                                            <TableCell>{format_datetime(&source.created_at_time)}</TableCell>
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
                    <div class="list-placeholder">"Loading cloud accounts..."</div>
                </Show>
                <Show when=move || list.is_empty()>
                    <div class="list-placeholder">"No cloud accounts connected"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
