use contracts::domain::a002_data_model::aggregate::{
    DeleteDataModelsInput, ListDataModelsInput, ListDataModelsResponse,
};

use crate::shared::api_utils::{post_json, post_unit, ApiError};

pub async fn list_data_models(input: &ListDataModelsInput) -> Result<ListDataModelsResponse, ApiError> {
    post_json("/api/data-models/list", input).await
}

pub async fn delete_data_models(input: &DeleteDataModelsInput) -> Result<(), ApiError> {
    post_unit("/api/data-models/delete", input).await
}
