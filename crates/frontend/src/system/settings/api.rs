use contracts::system::settings::{GeneralSettings, UpdateConsentInput};

use crate::shared::api_utils::{get_json, post_json, ApiError};

pub async fn fetch_general_settings() -> Result<GeneralSettings, ApiError> {
    get_json("/api/settings/general").await
}

pub async fn update_consent(input: &UpdateConsentInput) -> Result<GeneralSettings, ApiError> {
    post_json("/api/settings/general", input).await
}
