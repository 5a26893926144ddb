use contracts::domain::a004_destination::aggregate::{DeleteDestinationInput, Destination};
use leptos::prelude::*;

use super::{awaited_confirm, Outcome};
use crate::domain::a004_destination::api;
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::feedback::use_feedback;

#[derive(Clone)]
pub struct DeleteDestinationProps {
    pub destination: Destination,
    pub on_deleted: Option<Callback<()>>,
}

#[component]
pub fn DeleteDestinationModal(modal_props: DeleteDestinationProps) -> impl IntoView {
    let feedback = use_feedback();
    let loading = RwSignal::new(false);
    let name = modal_props.destination.display_name.clone();
    let input = DeleteDestinationInput {
        output_id: modal_props.destination.output_id.clone(),
    };

    let on_confirm = awaited_confirm(
        feedback,
        loading,
        Outcome {
            success: format!("Successfully deleted {}", name),
            failure: format!("Failed to delete {}", name),
        },
        modal_props.on_deleted,
        move || {
            let input = input.clone();
            async move { api::delete_destination(&input).await }
        },
    );

    view! {
        <ConfirmModal
            title=format!("Delete {}", name)
            subtitle=format!("Are you sure you want to delete {}?", name)
            on_confirm=on_confirm
            loading=loading
            confirm_label="Delete"
        />
    }
}
