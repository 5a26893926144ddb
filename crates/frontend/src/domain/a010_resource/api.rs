use contracts::domain::a010_resource::aggregate::{ListResourcesInput, ListResourcesResponse};

use crate::shared::api_utils::{post_json, ApiError};

pub async fn list_resources(input: &ListResourcesInput) -> Result<ListResourcesResponse, ApiError> {
    post_json("/api/resources/list", input).await
}
