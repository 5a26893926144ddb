use contracts::system::settings::{GeneralSettings, UpdateConsentInput};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::feedback::use_feedback;
use crate::shared::modal_frame::ModalFrame;
use crate::system::settings::api;

#[derive(Clone, Default)]
pub struct AnalyticsConsentProps {
    pub on_saved: Option<Callback<GeneralSettings>>,
}

/// Asked once, when consent was never recorded. Has no close button: the
/// user has to save a choice.
#[component]
pub fn AnalyticsConsentModal(modal_props: AnalyticsConsentProps) -> impl IntoView {
    let feedback = use_feedback();
    let error_reporting = RwSignal::new(false);
    let analytics = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let on_saved = modal_props.on_saved;

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let input = UpdateConsentInput {
            error_reporting_consent: error_reporting.get_untracked(),
            analytics_consent: analytics.get_untracked(),
        };
        spawn_local(async move {
            let result = api::update_consent(&input).await;
            saving.set(false);
            match result {
                Ok(settings) => {
                    feedback.modal().hide_modal();
                    feedback.success("Successfully updated your preferences");
                    if let Some(on_saved) = on_saved {
                        on_saved.run(settings);
                    }
                }
                Err(err) => feedback.api_error("Failed to save your preferences", &err),
            }
        });
    };

    view! {
        <ModalFrame
            title="Help us improve the console"
            on_close=Callback::new(|_| {})
            close_on_overlay=false
            show_close_button=false
        >
            <p class="modal-text">
                "Choose what the console may send us. You can change this later in General Settings."
            </p>
            <div class="form-group">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || error_reporting.get()
                        on:change=move |ev| error_reporting.set(event_target_checked(&ev))
                        disabled=move || saving.get()
                    />
                    " Report errors automatically"
                </label>
            </div>
            <div class="form-group">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || analytics.get()
                        on:change=move |ev| analytics.set(event_target_checked(&ev))
                        disabled=move || saving.get()
                    />
                    " Send anonymous product analytics"
                </label>
            </div>
            <Flex justify=FlexJustify::End class="modal-actions">
                <Button appearance=ButtonAppearance::Primary on_click=save loading=saving disabled=saving>
                    "Save"
                </Button>
            </Flex>
        </ModalFrame>
    }
}
