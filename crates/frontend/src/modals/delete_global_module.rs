use contracts::domain::a008_global_module::aggregate::{DeleteGlobalModuleInput, GlobalPythonModule};
use leptos::prelude::*;

use super::{awaited_confirm, Outcome};
use crate::domain::a008_global_module::api;
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::feedback::use_feedback;

#[derive(Clone)]
pub struct DeleteGlobalModuleProps {
    pub module: GlobalPythonModule,
    pub on_deleted: Option<Callback<()>>,
}

#[component]
pub fn DeleteGlobalModuleModal(modal_props: DeleteGlobalModuleProps) -> impl IntoView {
    let feedback = use_feedback();
    let loading = RwSignal::new(false);
    let id = modal_props.module.id.clone();
    let input = DeleteGlobalModuleInput { id: id.clone() };

    let on_confirm = awaited_confirm(
        feedback,
        loading,
        Outcome {
            success: format!("Successfully deleted {}", id),
            failure: format!("Failed to delete {}", id),
        },
        modal_props.on_deleted,
        move || {
            let input = input.clone();
            async move { api::delete_global_module(&input).await }
        },
    );

    view! {
        <ConfirmModal
            title=format!("Delete {}", id)
            subtitle=format!(
                "Are you sure you want to delete {}? Detections importing it will fail to run.",
                id
            )
            on_confirm=on_confirm
            loading=loading
            confirm_label="Delete"
        />
    }
}
