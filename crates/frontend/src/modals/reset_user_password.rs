use contracts::system::users::{User, UserIdInput};
use leptos::prelude::*;

use super::{awaited_confirm, Outcome};
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::feedback::use_feedback;
use crate::system::users::api;

#[derive(Clone)]
pub struct ResetUserPasswordProps {
    pub user: User,
}

#[component]
pub fn ResetUserPasswordModal(modal_props: ResetUserPasswordProps) -> impl IntoView {
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
            success: format!("Successfully forced a password reset for user {}", name),
            failure: format!("Failed to reset password for {}", name),
        },
        None,
        move || {
            let input = input.clone();
            async move { api::reset_user_password(&input).await }
        },
    );

    view! {
        <ConfirmModal
            title=format!("Force a password change for {}", name)
            subtitle=format!("Are you sure you want to reset password for {}?", name)
            on_confirm=on_confirm
            loading=loading
            confirm_label="Reset"
        />
    }
}
