use leptos::prelude::*;

use crate::shared::modal::use_modal;
use crate::shared::modal_frame::ModalFrame;

/// Free-form informational modal
#[derive(Debug, Clone, PartialEq)]
pub struct GenericProps {
    pub title: String,
    /// Paragraphs are separated by blank lines
    pub body: String,
    pub show_close_button: bool,
}

fn paragraphs(body: &str) -> Vec<String> {
    body.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[component]
pub fn GenericModal(modal_props: GenericProps) -> impl IntoView {
    let on_close = use_modal().close_callback();

    view! {
        <ModalFrame
            title=modal_props.title
            on_close=on_close
            show_close_button=modal_props.show_close_button
        >
            {paragraphs(&modal_props.body)
                .into_iter()
                .map(|p| view! { <p class="modal-text">{p}</p> })
                .collect_view()}
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs() {
        assert_eq!(
            paragraphs("Healthy\n\n  S3 bucket unreachable \n\n\n"),
            vec!["Healthy".to_string(), "S3 bucket unreachable".to_string()]
        );
        assert!(paragraphs("").is_empty());
    }
}
