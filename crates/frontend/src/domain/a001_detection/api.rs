use contracts::domain::a001_detection::aggregate::{
    DeleteDetectionsInput, ListDetectionsInput, ListDetectionsResponse,
};

use crate::shared::api_utils::{post_json, post_unit, ApiError};

pub async fn list_detections(input: &ListDetectionsInput) -> Result<ListDetectionsResponse, ApiError> {
    post_json("/api/detections/list", input).await
}

pub async fn delete_detections(input: &DeleteDetectionsInput) -> Result<(), ApiError> {
    post_unit("/api/detections/delete", input).await
}
