use contracts::system::users::{InviteUserInput, User};
use leptos::prelude::*;

use super::{awaited_confirm, Outcome};
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::feedback::use_feedback;
use crate::system::users::api;

#[derive(Clone)]
pub struct ReinviteUserProps {
    pub user: User,
    /// Runs after the invitation went out, to refresh the users list
    pub on_reinvited: Option<Callback<()>>,
}

#[component]
pub fn ReinviteUserModal(modal_props: ReinviteUserProps) -> impl IntoView {
    let feedback = use_feedback();
    let loading = RwSignal::new(false);
    let name = modal_props.user.display_name();
    let input = InviteUserInput::resend(&modal_props.user);

    let on_confirm = awaited_confirm(
        feedback,
        loading,
        Outcome {
            success: format!("Successfully reinvited user {}", name),
            failure: format!("Failed to reinvite user {}", name),
        },
        modal_props.on_reinvited,
        move || {
            let input = input.clone();
            async move { api::reinvite_user(&input).await }
        },
    );

    view! {
        <ConfirmModal
            title=format!("Reinvite user {}", name)
            subtitle=format!("Are you sure you want to reinvite user {}?", name)
            on_confirm=on_confirm
            loading=loading
            confirm_label="Reinvite"
        />
    }
}
