use contracts::domain::a005_log_source::aggregate::{DeleteLogSourceInput, LogSource};
use leptos::prelude::*;

use super::{awaited_confirm, Outcome};
use crate::domain::a005_log_source::api;
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::feedback::use_feedback;

#[derive(Clone)]
pub struct DeleteLogSourceProps {
    pub source: LogSource,
    pub on_deleted: Option<Callback<()>>,
}

#[component]
pub fn DeleteLogSourceModal(modal_props: DeleteLogSourceProps) -> impl IntoView {
    let feedback = use_feedback();
    let loading = RwSignal::new(false);
    let label = modal_props.source.integration_label.clone();
    let input = DeleteLogSourceInput {
        integration_id: modal_props.source.integration_id.clone(),
    };

    let on_confirm = awaited_confirm(
        feedback,
        loading,
        Outcome {
            success: format!("Deleted Log Source {}", label),
            failure: format!("Failed to delete Log Source {}", label),
        },
        modal_props.on_deleted,
        move || {
            let input = input.clone();
            async move { api::delete_log_source(&input).await }
        },
    );

    view! {
        <ConfirmModal
            title=format!("Delete {}", label)
            subtitle=format!(
                "Are you sure you want to delete {}? Logs of this source will stop being processed.",
                label
            )
            on_confirm=on_confirm
            loading=loading
            confirm_label="Delete"
        />
    }
}
