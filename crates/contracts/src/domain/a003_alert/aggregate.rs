use crate::domain::common::Severity;
use crate::shared::lenient;
use crate::shared::paging::{PagingData, SortDir};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertStatus {
    Open,
    Triaged,
    Closed,
    Resolved,
}

impl AlertStatus {
    pub const ALL: [AlertStatus; 4] = [
        AlertStatus::Open,
        AlertStatus::Triaged,
        AlertStatus::Closed,
        AlertStatus::Resolved,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AlertStatus::Open => "OPEN",
            AlertStatus::Triaged => "TRIAGED",
            AlertStatus::Closed => "CLOSED",
            AlertStatus::Resolved => "RESOLVED",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::Open => "Open",
            AlertStatus::Triaged => "Triaged",
            AlertStatus::Closed => "Closed",
            AlertStatus::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    Rule,
    RuleError,
    Policy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub alert_id: String,
    pub title: String,
    pub severity: Severity,
    pub status: AlertStatus,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub detection_id: String,
    #[serde(default)]
    pub log_types: Vec<String>,
    pub event_count: u64,
    pub creation_time: DateTime<Utc>,
    pub last_updated_by_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertSortField {
    CreatedAt,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListAlertsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub severity: Vec<Severity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<AlertStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::string_list")]
    pub log_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_count_min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<AlertSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDir>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAlertsResponse {
    pub alert_summaries: Vec<AlertSummary>,
    pub paging: PagingData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlertStatusInput {
    pub alert_ids: Vec<String>,
    pub status: AlertStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alert_type_wire_format() {
        assert_eq!(
            serde_json::to_value(AlertType::RuleError).unwrap(),
            json!("RULE_ERROR")
        );
    }

    #[test]
    fn test_list_input_from_url_shaped_json() {
        let input: ListAlertsInput = serde_json::from_value(json!({
            "page": 3,
            "status": ["OPEN", "TRIAGED"],
            "nameContains": 42
        }))
        .unwrap();
        assert_eq!(input.page, Some(3));
        assert_eq!(input.status, vec![AlertStatus::Open, AlertStatus::Triaged]);
        assert_eq!(input.name_contains.as_deref(), Some("42"));
    }
}
