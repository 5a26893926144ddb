use crate::shared::lenient;
use crate::shared::paging::{PagingData, SortDir};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource types reported by cloud account scans
pub const RESOURCE_TYPES: &[&str] = &[
    "AWS.ACM.Certificate",
    "AWS.CloudFormation.Stack",
    "AWS.CloudTrail",
    "AWS.CloudTrail.Meta",
    "AWS.CloudWatch.LogGroup",
    "AWS.Config.Recorder",
    "AWS.Config.Recorder.Meta",
    "AWS.DynamoDB.Table",
    "AWS.EC2.AMI",
    "AWS.EC2.Instance",
    "AWS.EC2.NetworkACL",
    "AWS.EC2.SecurityGroup",
    "AWS.EC2.Volume",
    "AWS.EC2.VPC",
    "AWS.ECS.Cluster",
    "AWS.EKS.Cluster",
    "AWS.ELBV2.ApplicationLoadBalancer",
    "AWS.GuardDuty.Detector",
    "AWS.GuardDuty.Detector.Meta",
    "AWS.IAM.Group",
    "AWS.IAM.Policy",
    "AWS.IAM.Role",
    "AWS.IAM.RootUser",
    "AWS.IAM.User",
    "AWS.KMS.Key",
    "AWS.Lambda.Function",
    "AWS.PasswordPolicy",
    "AWS.RDS.Instance",
    "AWS.Redshift.Cluster",
    "AWS.S3.Bucket",
    "AWS.WAF.Regional.WebAcl",
    "AWS.WAF.WebAcl",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceStatus {
    Pass,
    Fail,
    Error,
}

impl ComplianceStatus {
    pub const ALL: [ComplianceStatus; 3] = [
        ComplianceStatus::Pass,
        ComplianceStatus::Fail,
        ComplianceStatus::Error,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ComplianceStatus::Pass => "PASS",
            ComplianceStatus::Fail => "FAIL",
            ComplianceStatus::Error => "ERROR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Pass => "Pass",
            ComplianceStatus::Fail => "Fail",
            ComplianceStatus::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    pub id: String,
    pub integration_id: String,
    pub compliance_status: ComplianceStatus,
    #[serde(default)]
    pub deleted: bool,
    pub last_modified: DateTime<Utc>,
    #[serde(rename = "type")]
    pub resource_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceSortField {
    ComplianceStatus,
    Id,
    LastModified,
    Type,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListResourcesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub id_contains: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::string_list")]
    pub types: Vec<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub integration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_status: Option<ComplianceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<ResourceSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDir>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResourcesResponse {
    pub resources: Vec<ResourceSummary>,
    pub paging: PagingData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_reads_type_field() {
        let resource: ResourceSummary = serde_json::from_value(json!({
            "id": "arn:aws:s3:::logs",
            "integrationId": "acct-1",
            "complianceStatus": "FAIL",
            "lastModified": "2021-03-01T10:00:00Z",
            "type": "AWS.S3.Bucket"
        }))
        .unwrap();
        assert_eq!(resource.resource_type, "AWS.S3.Bucket");
        assert_eq!(resource.compliance_status, ComplianceStatus::Fail);
        assert!(!resource.deleted);
    }

    #[test]
    fn test_list_input_skips_unset_filters() {
        let input = ListResourcesInput {
            page: Some(2),
            types: vec!["AWS.S3.Bucket".to_string()],
            compliance_status: Some(ComplianceStatus::Pass),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "page": 2, "types": ["AWS.S3.Bucket"], "complianceStatus": "PASS" })
        );
    }
}
