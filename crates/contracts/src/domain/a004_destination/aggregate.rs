use crate::domain::common::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    Slack,
    Pagerduty,
    Github,
    Jira,
    Opsgenie,
    Msteams,
    Sns,
    Sqs,
    Asana,
    Customwebhook,
}

impl DestinationType {
    pub fn label(&self) -> &'static str {
        match self {
            DestinationType::Slack => "Slack",
            DestinationType::Pagerduty => "PagerDuty",
            DestinationType::Github => "GitHub",
            DestinationType::Jira => "Jira",
            DestinationType::Opsgenie => "Opsgenie",
            DestinationType::Msteams => "Microsoft Teams",
            DestinationType::Sns => "Amazon SNS",
            DestinationType::Sqs => "Amazon SQS",
            DestinationType::Asana => "Asana",
            DestinationType::Customwebhook => "Custom Webhook",
        }
    }
}

/// Endpoint that receives alert notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub output_id: String,
    pub display_name: String,
    pub output_type: DestinationType,
    #[serde(default)]
    pub default_for_severity: Vec<Severity>,
    pub last_modified_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDestinationInput {
    pub output_id: String,
}
