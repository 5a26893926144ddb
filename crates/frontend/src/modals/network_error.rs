use leptos::prelude::*;
use thaw::*;

use crate::shared::modal::use_modal;
use crate::shared::modal_frame::ModalFrame;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkErrorProps {
    /// Replaces the default explanation
    pub message: Option<String>,
}

#[component]
pub fn NetworkErrorModal(modal_props: NetworkErrorProps) -> impl IntoView {
    let on_close = use_modal().close_callback();
    let message = modal_props.message.unwrap_or_else(|| {
        "The console could not reach the server. Check your connection, then reload the page."
            .to_string()
    });

    let reload = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <ModalFrame title="Network error" on_close=on_close>
            <p class="modal-text">{message}</p>
            <Flex justify=FlexJustify::End gap=FlexGap::Small class="modal-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Dismiss"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=reload>
                    "Reload"
                </Button>
            </Flex>
        </ModalFrame>
    }
}
