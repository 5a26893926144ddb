use super::{use_modal, Modal};
use crate::modals::analytics_consent::AnalyticsConsentModal;
use crate::modals::delete_compliance_source::DeleteComplianceSourceModal;
use crate::modals::delete_custom_log::DeleteCustomLogModal;
use crate::modals::delete_data_models::DeleteDataModelsModal;
use crate::modals::delete_destination::DeleteDestinationModal;
use crate::modals::delete_detections::DeleteDetectionsModal;
use crate::modals::delete_global_module::DeleteGlobalModuleModal;
use crate::modals::delete_log_source::DeleteLogSourceModal;
use crate::modals::delete_user::DeleteUserModal;
use crate::modals::edit_profile_settings::EditProfileSettingsModal;
use crate::modals::generic::GenericModal;
use crate::modals::network_error::NetworkErrorModal;
use crate::modals::reinvite_user::ReinviteUserModal;
use crate::modals::reset_user_password::ResetUserPasswordModal;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Renders whichever modal is currently shown. Mounted once at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal();

    // One listener for the lifetime of the app
    let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if keyboard_event.key() != "Escape" {
            return;
        }
        let dismissible = svc
            .state
            .with_untracked(|s| s.is_visible && s.modal.as_ref().is_some_and(Modal::dismissible));
        if dismissible {
            svc.close_soon();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        if let Err(err) =
            window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        {
            log::warn!("modal host: Escape handler not installed: {:?}", err);
        }
    }
    on_keydown.forget();

    move || {
        svc.state.with(|state| {
            if !state.is_visible {
                return None;
            }
            state.modal.clone().map(render_modal)
        })
    }
}

fn render_modal(modal: Modal) -> AnyView {
    match modal {
        Modal::DeleteDetections(props) => view! { <DeleteDetectionsModal modal_props=props /> }.into_any(),
        Modal::DeleteDataModels(props) => view! { <DeleteDataModelsModal modal_props=props /> }.into_any(),
        Modal::DeleteDestination(props) => view! { <DeleteDestinationModal modal_props=props /> }.into_any(),
        Modal::DeleteLogSource(props) => view! { <DeleteLogSourceModal modal_props=props /> }.into_any(),
        Modal::DeleteComplianceSource(props) => {
            view! { <DeleteComplianceSourceModal modal_props=props /> }.into_any()
        }
        Modal::DeleteCustomLog(props) => view! { <DeleteCustomLogModal modal_props=props /> }.into_any(),
        Modal::DeleteGlobalModule(props) => {
            view! { <DeleteGlobalModuleModal modal_props=props /> }.into_any()
        }
        Modal::DeleteUser(props) => view! { <DeleteUserModal modal_props=props /> }.into_any(),
        Modal::ResetUserPassword(props) => view! { <ResetUserPasswordModal modal_props=props /> }.into_any(),
        Modal::ReinviteUser(props) => view! { <ReinviteUserModal modal_props=props /> }.into_any(),
        Modal::EditProfileSettings(props) => {
            view! { <EditProfileSettingsModal modal_props=props /> }.into_any()
        }
        Modal::NetworkError(props) => view! { <NetworkErrorModal modal_props=props /> }.into_any(),
        Modal::AnalyticsConsent(props) => view! { <AnalyticsConsentModal modal_props=props /> }.into_any(),
        Modal::Generic(props) => view! { <GenericModal modal_props=props /> }.into_any(),
    }
}
