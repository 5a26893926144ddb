use contracts::domain::a005_log_source::aggregate::LogSource;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_log_source::api;
use crate::modals::delete_log_source::DeleteLogSourceProps;
use crate::modals::generic::GenericProps;
use crate::shared::date_utils::{format_datetime, format_opt_datetime};
use crate::shared::feedback::use_feedback;
use crate::shared::list_state::{unpaged, ListLoader};
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Generic modal listing the failing health checks of a source
pub fn health_details(source: &LogSource) -> GenericProps {
    let failing: Vec<&str> = source
        .failing_checks()
        .map(|check| check.message.as_str())
        .filter(|message| !message.is_empty())
        .collect();
    let body = if failing.is_empty() {
        "All health checks are passing.".to_string()
    } else {
        failing.join("\n\n")
    };
    GenericProps {
        title: format!("{} health", source.integration_label),
        body,
        show_close_button: true,
    }
}

#[component]
pub fn LogSourcesListPage() -> impl IntoView {
    let feedback = use_feedback();
    let modal = feedback.modal();
    let list = ListLoader::<LogSource>::new();

    Effect::new(move |_| {
        list.load(feedback, "Failed to load log sources", async move {
            api::list_log_sources().await.map(unpaged)
        });
    });

    let open_delete = move |source: LogSource| {
        modal.show_modal(Modal::DeleteLogSource(DeleteLogSourceProps {
            source,
            on_deleted: Some(Callback::new(move |_| list.reload())),
        }));
    };

    let items = list.items_signal();
    let loading = list.loading();

    view! {
        <PageFrame page_id="log_sources--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Log Sources"</h1>
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
                                <TableHeaderCell>"Source"</TableHeaderCell>
                                <TableHeaderCell>"Log Types"</TableHeaderCell>
                                <TableHeaderCell>"Health"</TableHeaderCell>
                                <TableHeaderCell>"Last Event"</TableHeaderCell>
                                <TableHeaderCell>"Date Created"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|source| source.integration_id.clone()
                                children=move |source| {
                                    let details = health_details(&source);
                                    let healthy = source.is_healthy();
                                    let for_delete = source.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{source.integration_label.clone()}</TableCell>
                                            <TableCell>{source.integration_type.label()}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {source.log_types.join(", ")}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <button
                                                    class="link-button"
                                                    on:click=move |_| modal.show_modal(Modal::Generic(details.clone()))
                                                >
                                                    <Badge
                                                        appearance=BadgeAppearance::Tint
                                                        color={ if healthy { BadgeColor::Success } else { BadgeColor::Danger } }
                                                    >
                                                        {if healthy { "Healthy" } else { "Unhealthy" }}
                                                    </Badge>
                                                </button>
                                            </TableCell>
                                            <TableCell>{format_opt_datetime(source.last_event_received.as_ref())}</TableCell>
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
                    <div class="list-placeholder">"Loading log sources..."</div>
                </Show>
                <Show when=move || list.is_empty()>
                    <div class="list-placeholder">"No log sources onboarded"</div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_log_source::aggregate::{HealthCheck, LogSourceType};

    fn source(health: Vec<HealthCheck>) -> LogSource {
        LogSource {
            integration_id: "1".to_string(),
            integration_label: "CloudTrail bucket".to_string(),
            integration_type: LogSourceType::AwsS3,
            log_types: vec!["AWS.CloudTrail".to_string()],
            created_at_time: chrono::Utc::now(),
            last_event_received: None,
            health,
        }
    }

    fn check(healthy: bool, message: &str) -> HealthCheck {
        HealthCheck {
            healthy,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_health_details_lists_failing_checks() {
        let props = health_details(&source(vec![
            check(true, "Role is assumable"),
            check(false, "Bucket is not readable"),
            check(false, "KMS key is missing"),
        ]));
        assert_eq!(props.title, "CloudTrail bucket health");
        assert_eq!(props.body, "Bucket is not readable\n\nKMS key is missing");
        assert!(props.show_close_button);
    }

    #[test]
    fn test_health_details_for_healthy_source() {
        let props = health_details(&source(vec![check(true, "ok")]));
        assert_eq!(props.body, "All health checks are passing.");
    }
}
