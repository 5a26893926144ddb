use crate::shared::modal::use_modal;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

/// Yes/no dialog shared by the delete and reset modals
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    on_confirm: Callback<()>,
    /// Disables both buttons and spins the confirm button
    #[prop(optional, into)]
    loading: Signal<bool>,
    #[prop(optional, into)] confirm_label: Option<String>,
) -> impl IntoView {
    let on_close = use_modal().close_callback();
    let confirm_label = confirm_label.unwrap_or_else(|| "Confirm".to_string());

    view! {
        <ModalFrame title=title on_close=on_close modal_class="modal--confirm">
            <p class="modal-subtitle">{subtitle}</p>
            <Flex justify=FlexJustify::End gap=FlexGap::Small class="modal-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=loading
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_confirm.run(())
                    loading=loading
                    disabled=loading
                >
                    {confirm_label}
                </Button>
            </Flex>
        </ModalFrame>
    }
}
