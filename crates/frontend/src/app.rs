use crate::layout::global_context::AppGlobalContext;
use crate::modals::analytics_consent::AnalyticsConsentProps;
use crate::routes::routes::AppRoutes;
use crate::shared::modal::{Modal, ModalHost, ModalService};
use crate::shared::snackbar::{SnackbarHost, SnackbarService};
use crate::system::settings::api::fetch_general_settings;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    // one modal and one snackbar stack for the whole console
    let modal = ModalService::new();
    provide_context(modal);
    provide_context(SnackbarService::new());

    spawn_local(async move {
        match fetch_general_settings().await {
            Ok(settings) if settings.needs_consent() => {
                modal.show_modal(Modal::AnalyticsConsent(AnalyticsConsentProps::default()));
            }
            Ok(_) => {}
            Err(err) => log::warn!("general settings not loaded: {}", err),
        }
    });

    view! {
        <Router>
            <AppRoutes />
        </Router>
        <ModalHost />
        <SnackbarHost />
    }
}
