use contracts::domain::a008_global_module::aggregate::{DeleteGlobalModuleInput, GlobalPythonModule};

use crate::shared::api_utils::{get_json, post_unit, ApiError};

pub async fn list_global_modules() -> Result<Vec<GlobalPythonModule>, ApiError> {
    get_json("/api/global-modules/list").await
}

pub async fn delete_global_module(input: &DeleteGlobalModuleInput) -> Result<(), ApiError> {
    post_unit("/api/global-modules/delete", input).await
}
