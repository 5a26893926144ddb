use contracts::domain::a001_detection::aggregate::{DeleteDetectionsInput, Detection};
use leptos::prelude::*;

use super::{optimistic_confirm, Outcome};
use crate::domain::a001_detection::api;
use crate::shared::components::confirm_modal::ConfirmModal;
use crate::shared::feedback::use_feedback;
use crate::shared::text::to_plural;

#[derive(Clone)]
pub struct DeleteDetectionsProps {
    pub detections: Vec<Detection>,
    /// Runs as soon as the deletion is confirmed
    pub on_success: Option<Callback<()>>,
    /// Runs once the server answered
    pub on_settled: Option<Callback<()>>,
}

fn title(detections: &[Detection]) -> String {
    match detections {
        [_] => "Delete Detection".to_string(),
        many => format!("Delete {} Detections", many.len()),
    }
}

fn subtitle(detections: &[Detection]) -> String {
    match detections {
        [single] => format!("Are you sure you want to delete {}?", single.title()),
        many => format!("Are you sure you want to delete {} detections?", many.len()),
    }
}

fn outcome(detections: &[Detection]) -> Outcome {
    let count = detections.len();
    let plural = format!("{} detections", count);
    let noun = to_plural("detection", &plural, count);
    Outcome {
        success: format!("Successfully deleted {}", noun),
        failure: format!("Failed to delete {}", noun),
    }
}

#[component]
pub fn DeleteDetectionsModal(modal_props: DeleteDetectionsProps) -> impl IntoView {
    let feedback = use_feedback();
    let input = DeleteDetectionsInput::from_detections(&modal_props.detections);

    let on_confirm = optimistic_confirm(
        feedback,
        outcome(&modal_props.detections),
        modal_props.on_success,
        modal_props.on_settled,
        move || {
            let input = input.clone();
            async move { api::delete_detections(&input).await }
        },
    );

    view! {
        <ConfirmModal
            title=title(&modal_props.detections)
            subtitle=subtitle(&modal_props.detections)
            on_confirm=on_confirm
            confirm_label="Delete"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::a001_detection::aggregate::DetectionType;
    use contracts::domain::common::Severity;

    fn detection(id: &str, name: Option<&str>) -> Detection {
        Detection {
            id: id.to_string(),
            display_name: name.map(str::to_string),
            analysis_type: DetectionType::Rule,
            enabled: true,
            severity: Severity::High,
            log_types: vec!["AWS.CloudTrail".into()],
            resource_types: vec![],
            tags: vec![],
            last_modified: Utc::now(),
        }
    }

    #[test]
    fn test_single_detection_copy() {
        let one = vec![detection("AWS.Root.Login", Some("Root account login"))];
        assert_eq!(title(&one), "Delete Detection");
        assert_eq!(subtitle(&one), "Are you sure you want to delete Root account login?");
        assert_eq!(outcome(&one).success, "Successfully deleted detection");

        let unnamed = vec![detection("AWS.Root.Login", None)];
        assert_eq!(subtitle(&unnamed), "Are you sure you want to delete AWS.Root.Login?");
    }

    #[test]
    fn test_multi_detection_copy() {
        let many = vec![detection("a", None), detection("b", None), detection("c", None)];
        assert_eq!(title(&many), "Delete 3 Detections");
        assert_eq!(subtitle(&many), "Are you sure you want to delete 3 detections?");
        assert_eq!(outcome(&many).failure, "Failed to delete 3 detections");
    }
}
