use contracts::domain::a004_destination::aggregate::Destination;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_destination::api;
use crate::modals::delete_destination::DeleteDestinationProps;
use crate::shared::components::severity_badge::SeverityBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::feedback::use_feedback;
use crate::shared::list_state::{unpaged, ListLoader};
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn DestinationsListPage() -> impl IntoView {
    let feedback = use_feedback();
    let modal = feedback.modal();
    let list = ListLoader::<Destination>::new();

    Effect::new(move |_| {
        list.load(feedback, "Failed to load destinations", async move {
            api::list_destinations().await.map(unpaged)
        });
    });

    let open_delete = move |destination: Destination| {
        modal.show_modal(Modal::DeleteDestination(DeleteDestinationProps {
            destination,
            on_deleted: Some(Callback::new(move |_| list.reload())),
        }));
    };

    let items = list.items_signal();
    let loading = list.loading();

    view! {
        <PageFrame page_id="destinations--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Destinations"</h1>
                    <Badge appearance=BadgeAppearance::Tint>{move || items.with(Vec::len)}</Badge>
                </div>
            </div>

            <div class="page__content">
                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Display Name"</TableHeaderCell>
                                <TableHeaderCell>"Integrated Service"</TableHeaderCell>
                                <TableHeaderCell>"Associated Severities"</TableHeaderCell>
                                <TableHeaderCell>"Last Updated"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|destination| destination.output_id.clone()
                                children=move |destination| {
                                    let for_delete = destination.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{destination.display_name.clone()}</TableCell>
                                            <TableCell>{destination.output_type.label()}</TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    {destination
                                                        .default_for_severity
                                                        .iter()
                                                        .map(|severity| view! { <SeverityBadge severity=*severity /> })
                                                        .collect_view()}
                                                </Flex>
                                            </TableCell>
                                            <TableCell>{format_datetime(&destination.last_modified_time)}</TableCell>
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
                    <div class="list-placeholder">"Loading destinations..."</div>
                </Show>
                <Show when=move || list.is_empty()>
                    <div class="list-placeholder">"No destinations configured"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
