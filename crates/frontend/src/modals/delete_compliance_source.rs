use contracts::domain::a006_compliance_source::aggregate::{
    ComplianceSource, DeleteComplianceSourceInput,
};
use leptos::prelude::*;

use super::{awaited_confirm, Outcome};
use crate::domain::a006_compliance_source::api;
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::feedback::use_feedback;

#[derive(Clone)]
pub struct DeleteComplianceSourceProps {
    pub source: ComplianceSource,
    pub on_deleted: Option<Callback<()>>,
}

#[component]
pub fn DeleteComplianceSourceModal(modal_props: DeleteComplianceSourceProps) -> impl IntoView {
    let feedback = use_feedback();
    let loading = RwSignal::new(false);
    let label = modal_props.source.integration_label.clone();
    let input = DeleteComplianceSourceInput {
        integration_id: modal_props.source.integration_id.clone(),
    };

    let on_confirm = awaited_confirm(
        feedback,
        loading,
        Outcome {
            success: format!("Deleted Cloud Account {}", label),
            failure: format!("Failed to delete Cloud Account {}", label),
        },
        modal_props.on_deleted,
        move || {
            let input = input.clone();
            async move { api::delete_compliance_source(&input).await }
        },
    );

    view! {
        <ConfirmModal
            title=format!("Delete {}", label)
            subtitle=format!(
                "Are you sure you want to delete {} (account {})?",
                label, modal_props.source.aws_account_id
            )
            on_confirm=on_confirm
            loading=loading
            confirm_label="Delete"
        />
    }
}
