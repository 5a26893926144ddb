use contracts::domain::a007_custom_log::aggregate::{CustomLogRecord, DeleteCustomLogInput};

use crate::shared::api_utils::{get_json, post_unit, ApiError};

pub async fn list_custom_logs() -> Result<Vec<CustomLogRecord>, ApiError> {
    get_json("/api/custom-logs/list").await
}

pub async fn delete_custom_log(input: &DeleteCustomLogInput) -> Result<(), ApiError> {
    post_unit("/api/custom-logs/delete", input).await
}
