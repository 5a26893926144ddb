use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cloud account scanned for resource state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSource {
    pub integration_id: String,
    pub integration_label: String,
    pub aws_account_id: String,
    #[serde(default)]
    pub cwe_enabled: bool,
    #[serde(default)]
    pub remediation_enabled: bool,
    pub created_at_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteComplianceSourceInput {
    pub integration_id: String,
}
