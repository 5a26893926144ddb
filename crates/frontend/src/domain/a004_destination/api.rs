use contracts::domain::a004_destination::aggregate::{DeleteDestinationInput, Destination};

use crate::shared::api_utils::{get_json, post_unit, ApiError};

pub async fn list_destinations() -> Result<Vec<Destination>, ApiError> {
    get_json("/api/destinations/list").await
}

pub async fn delete_destination(input: &DeleteDestinationInput) -> Result<(), ApiError> {
    post_unit("/api/destinations/delete", input).await
}
