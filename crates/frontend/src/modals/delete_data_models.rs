use contracts::domain::a002_data_model::aggregate::{DataModel, DeleteDataModelsInput};
use leptos::prelude::*;

use super::{optimistic_confirm, Outcome};
use crate::domain::a002_data_model::api;
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::feedback::use_feedback;
use crate::shared::text::to_plural;

#[derive(Clone)]
pub struct DeleteDataModelsProps {
    pub data_models: Vec<DataModel>,
    /// Runs as soon as the deletion is confirmed
    pub on_delete: Option<Callback<()>>,
    pub on_settled: Option<Callback<()>>,
}

fn noun(count: usize) -> &'static str {
    to_plural("Data Model", "Data Models", count)
}

fn subtitle(models: &[DataModel]) -> String {
    match models {
        [single] => format!("Are you sure you want to delete {}?", single.title()),
        many => format!("Are you sure you want to delete {} Data Models?", many.len()),
    }
}

#[component]
pub fn DeleteDataModelsModal(modal_props: DeleteDataModelsProps) -> impl IntoView {
    let feedback = use_feedback();
    let count = modal_props.data_models.len();
    let input = DeleteDataModelsInput::from_models(&modal_props.data_models);

    let on_confirm = optimistic_confirm(
        feedback,
        Outcome {
            success: format!("Successfully deleted your {}", noun(count)),
            failure: format!("Failed to delete your {}", noun(count)),
        },
        modal_props.on_delete,
        modal_props.on_settled,
        move || {
            let input = input.clone();
            async move { api::delete_data_models(&input).await }
        },
    );

    view! {
        <ConfirmModal
            title=format!("Delete {}", noun(count))
            subtitle=subtitle(&modal_props.data_models)
            on_confirm=on_confirm
            confirm_label="Delete"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(id: &str, name: &str) -> DataModel {
        DataModel {
            id: id.to_string(),
            display_name: Some(name.to_string()),
            enabled: true,
            log_types: vec!["AWS.ALB".into()],
            last_modified: Utc::now(),
        }
    }

    #[test]
    fn test_subtitle() {
        assert_eq!(
            subtitle(&[model("alb", "ALB fields")]),
            "Are you sure you want to delete ALB fields?"
        );
        assert_eq!(
            subtitle(&[model("a", "A"), model("b", "B")]),
            "Are you sure you want to delete 2 Data Models?"
        );
        assert_eq!(noun(1), "Data Model");
    }
}
