use contracts::domain::a006_compliance_source::aggregate::{
    ComplianceSource, DeleteComplianceSourceInput,
};

use crate::shared::api_utils::{get_json, post_unit, ApiError};

pub async fn list_compliance_sources() -> Result<Vec<ComplianceSource>, ApiError> {
    get_json("/api/compliance-sources/list").await
}

pub async fn delete_compliance_source(input: &DeleteComplianceSourceInput) -> Result<(), ApiError> {
    post_unit("/api/compliance-sources/delete", input).await
}
