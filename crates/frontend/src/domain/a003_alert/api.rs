use contracts::domain::a003_alert::aggregate::{
    ListAlertsInput, ListAlertsResponse, UpdateAlertStatusInput,
};

use crate::shared::api_utils::{post_json, post_unit, ApiError};

pub async fn list_alerts(input: &ListAlertsInput) -> Result<ListAlertsResponse, ApiError> {
    post_json("/api/alerts/list", input).await
}

pub async fn update_alert_status(input: &UpdateAlertStatusInput) -> Result<(), ApiError> {
    post_unit("/api/alerts/update-status", input).await
}
