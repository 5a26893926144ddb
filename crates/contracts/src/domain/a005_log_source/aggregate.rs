use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogSourceType {
    #[serde(rename = "aws-s3")]
    AwsS3,
    #[serde(rename = "aws-sqs")]
    AwsSqs,
}

impl LogSourceType {
    pub fn label(&self) -> &'static str {
        match self {
            LogSourceType::AwsS3 => "AWS S3 Bucket",
            LogSourceType::AwsSqs => "AWS SQS Queue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub healthy: bool,
    #[serde(default)]
    pub message: String,
}

/// Configured queue or bucket the platform ingests log events from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSource {
    pub integration_id: String,
    pub integration_label: String,
    pub integration_type: LogSourceType,
    #[serde(default)]
    pub log_types: Vec<String>,
    pub created_at_time: DateTime<Utc>,
    #[serde(default)]
    pub last_event_received: Option<DateTime<Utc>>,
    #[serde(default)]
    pub health: Vec<HealthCheck>,
}

impl LogSource {
    pub fn is_healthy(&self) -> bool {
        self.health.iter().all(|check| check.healthy)
    }

    pub fn failing_checks(&self) -> impl Iterator<Item = &HealthCheck> {
        self.health.iter().filter(|check| !check.healthy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLogSourceInput {
    pub integration_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_is_aggregated() {
        let source: LogSource = serde_json::from_value(json!({
            "integrationId": "1",
            "integrationLabel": "prod-cloudtrail",
            "integrationType": "aws-s3",
            "createdAtTime": "2020-10-01T12:00:00Z",
            "health": [
                { "healthy": true, "message": "bucket reachable" },
                { "healthy": false, "message": "kms key denied" }
            ]
        }))
        .unwrap();
        assert!(!source.is_healthy());
        let failing: Vec<_> = source.failing_checks().map(|c| c.message.as_str()).collect();
        assert_eq!(failing, vec!["kms key denied"]);
    }
}
