//! Concrete modals rendered by [`crate::shared::modal::ModalHost`].
//!
//! Each module exports its props type, carried by the matching
//! [`crate::shared::modal::Modal`] variant, and the component that renders it.

pub mod analytics_consent;
pub mod delete_compliance_source;
pub mod delete_custom_log;
pub mod delete_data_models;
pub mod delete_destination;
pub mod delete_detections;
pub mod delete_global_module;
pub mod delete_log_source;
pub mod delete_user;
pub mod edit_profile_settings;
pub mod generic;
pub mod network_error;
pub mod reinvite_user;
pub mod reset_user_password;

use crate::shared::api_utils::ApiError;
use crate::shared::feedback::Feedback;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Outcome messages of a modal's request
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Outcome {
    pub success: String,
    pub failure: String,
}

/// Confirm handler that keeps the modal open with a spinner until the request
/// settles, then closes it and reports the outcome.
pub(crate) fn awaited_confirm<F, Fut>(
    feedback: Feedback,
    loading: RwSignal<bool>,
    outcome: Outcome,
    on_done: Option<Callback<()>>,
    request: F,
) -> Callback<()>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    Callback::new(move |_| {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        let outcome = outcome.clone();
        let pending = request();
        spawn_local(async move {
            let result = pending.await;
            loading.set(false);
            feedback.modal().hide_modal();
            match result {
                Ok(()) => {
                    feedback.success(outcome.success);
                    if let Some(on_done) = on_done {
                        on_done.run(());
                    }
                }
                Err(err) => feedback.api_error(&outcome.failure, &err),
            }
        });
    })
}

/// Confirm handler that closes the modal at once and lets the request finish
/// in the background. `on_success` runs immediately, `on_settled` after the
/// server answered either way.
pub(crate) fn optimistic_confirm<F, Fut>(
    feedback: Feedback,
    outcome: Outcome,
    on_success: Option<Callback<()>>,
    on_settled: Option<Callback<()>>,
    request: F,
) -> Callback<()>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    Callback::new(move |_| {
        feedback.modal().close_soon();
        if let Some(on_success) = on_success {
            on_success.run(());
        }
        let outcome = outcome.clone();
        let pending = request();
        spawn_local(async move {
            match pending.await {
                Ok(()) => feedback.success(outcome.success),
                Err(err) => feedback.api_error(&outcome.failure, &err),
            }
            if let Some(on_settled) = on_settled {
                on_settled.run(());
            }
        });
    })
}
