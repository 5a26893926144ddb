use contracts::system::users::{UpdateProfileInput, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::feedback::use_feedback;
use crate::shared::modal_frame::ModalFrame;
use crate::system::users::api;

#[derive(Clone)]
pub struct EditProfileSettingsProps {
    pub user: User,
    pub on_saved: Option<Callback<User>>,
}

fn validate(given_name: &str, family_name: &str) -> Result<UpdateProfileInput, &'static str> {
    let given_name = given_name.trim();
    let family_name = family_name.trim();
    if given_name.is_empty() {
        return Err("First name is required");
    }
    if family_name.is_empty() {
        return Err("Last name is required");
    }
    Ok(UpdateProfileInput {
        given_name: given_name.to_string(),
        family_name: family_name.to_string(),
    })
}

#[component]
pub fn EditProfileSettingsModal(modal_props: EditProfileSettingsProps) -> impl IntoView {
    let feedback = use_feedback();
    let on_close = feedback.modal().close_callback();
    let given_name = RwSignal::new(modal_props.user.given_name.clone());
    let family_name = RwSignal::new(modal_props.user.family_name.clone());
    let (error, set_error) = signal::<Option<&'static str>>(None);
    let saving = RwSignal::new(false);
    let on_saved = modal_props.on_saved;

    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let input = match validate(&given_name.get_untracked(), &family_name.get_untracked()) {
            Ok(input) => input,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        set_error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = api::update_profile(&input).await;
            saving.set(false);
            match result {
                Ok(user) => {
                    feedback.modal().hide_modal();
                    feedback.success("Successfully updated profile!");
                    if let Some(on_saved) = on_saved {
                        on_saved.run(user);
                    }
                }
                Err(err) => feedback.api_error("Failed to update profile", &err),
            }
        });
    };

    view! {
        <ModalFrame title="Profile Settings" on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form-group">
                <label>"Email address"</label>
                <div class="form-static">{modal_props.user.email.clone()}</div>
            </div>
            <div class="form-group">
                <label>"First Name"</label>
                <Input value=given_name placeholder="First name" />
            </div>
            <div class="form-group">
                <label>"Last Name"</label>
                <Input value=family_name placeholder="Last name" />
            </div>
            <Flex justify=FlexJustify::End gap=FlexGap::Small class="modal-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(()) disabled=saving>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=submit loading=saving disabled=saving>
                    "Update"
                </Button>
            </Flex>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_names() {
        let input = validate("  Ada ", "Lovelace").unwrap();
        assert_eq!(input.given_name, "Ada");
        assert_eq!(input.family_name, "Lovelace");
    }

    #[test]
    fn test_validate_requires_both_names() {
        assert_eq!(validate(" ", "Lovelace"), Err("First name is required"));
        assert_eq!(validate("Ada", ""), Err("Last name is required"));
    }
}
