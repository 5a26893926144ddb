use contracts::domain::a007_custom_log::aggregate::{CustomLogRecord, DeleteCustomLogInput};
use leptos::prelude::*;

use super::{awaited_confirm, Outcome};
use crate::domain::a007_custom_log::api;
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::feedback::use_feedback;

#[derive(Clone)]
pub struct DeleteCustomLogProps {
    pub custom_log: CustomLogRecord,
    pub on_deleted: Option<Callback<()>>,
}

#[component]
pub fn DeleteCustomLogModal(modal_props: DeleteCustomLogProps) -> impl IntoView {
    let feedback = use_feedback();
    let loading = RwSignal::new(false);
    let log_type = modal_props.custom_log.log_type.clone();
    let input = DeleteCustomLogInput {
        log_type: log_type.clone(),
        revision: modal_props.custom_log.revision,
    };

    let on_confirm = awaited_confirm(
        feedback,
        loading,
        Outcome {
            success: format!("Successfully deleted {}", log_type),
            failure: format!("Failed to delete {}", log_type),
        },
        modal_props.on_deleted,
        move || {
            let input = input.clone();
            async move { api::delete_custom_log(&input).await }
        },
    );

    view! {
        <ConfirmModal
            title=format!("Delete {}", log_type)
            subtitle=format!(
                "Are you sure you want to delete {}? Sources using this schema will stop classifying it.",
                log_type
            )
            on_confirm=on_confirm
            loading=loading
            confirm_label="Delete"
        />
    }
}
