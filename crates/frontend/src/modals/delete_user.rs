use contracts::system::users::{User, UserIdInput};
use leptos::prelude::*;

use super::{awaited_confirm, Outcome};
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::feedback::use_feedback;
use crate::system::users::api;

#[derive(Clone)]
pub struct DeleteUserProps {
    pub user: User,
    pub on_deleted: Option<Callback<()>>,
}

#[component]
pub fn DeleteUserModal(modal_props: DeleteUserProps) -> impl IntoView {
    let feedback = use_feedback();
    let loading = RwSignal::new(false);
    let name = modal_props.user.display_name();
    let input = UserIdInput {
        id: modal_props.user.id.clone(),
    };

    let on_confirm = awaited_confirm(
        feedback,
        loading,
        Outcome {
            success: format!("Successfully deleted user {}", name),
            failure: format!("Failed to delete user {}", name),
        },
        modal_props.on_deleted,
        move || {
            let input = input.clone();
            async move { api::delete_user(&input).await }
        },
    );

    view! {
        <ConfirmModal
            title=format!("Delete {}", name)
            subtitle=format!("Are you sure you want to delete user {}?", name)
            on_confirm=on_confirm
            loading=loading
            confirm_label="Delete"
        />
    }
}
