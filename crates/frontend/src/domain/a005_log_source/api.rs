use contracts::domain::a005_log_source::aggregate::{DeleteLogSourceInput, LogSource};

use crate::shared::api_utils::{get_json, post_unit, ApiError};

pub async fn list_log_sources() -> Result<Vec<LogSource>, ApiError> {
    get_json("/api/log-sources/list").await
}

pub async fn delete_log_source(input: &DeleteLogSourceInput) -> Result<(), ApiError> {
    post_unit("/api/log-sources/delete", input).await
}
