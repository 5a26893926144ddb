use crate::domain::common::{DeleteEntry, Severity};
use crate::shared::lenient;
use crate::shared::paging::{PagingData, SortDir};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DetectionType {
    Rule,
    Policy,
}

impl DetectionType {
    pub fn label(&self) -> &'static str {
        match self {
            DetectionType::Rule => "Rule",
            DetectionType::Policy => "Policy",
        }
    }
}

/// Rule or policy summary as shown in the detections list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub analysis_type: DetectionType,
    pub enabled: bool,
    pub severity: Severity,
    /// Log types for rules
    #[serde(default)]
    pub log_types: Vec<String>,
    /// Resource types for policies
    #[serde(default)]
    pub resource_types: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub last_modified: DateTime<Utc>,
}

impl Detection {
    pub fn title(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }

    /// Log types or resource types, depending on the detection kind
    pub fn targets(&self) -> &[String] {
        match self.analysis_type {
            DetectionType::Rule => &self.log_types,
            DetectionType::Policy => &self.resource_types,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetectionSortField {
    DisplayName,
    Enabled,
    Id,
    LastModified,
    Severity,
}

/// Filters of the detections list; every field maps to one URL parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDetectionsInput {
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
    pub analysis_types: Vec<DetectionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub severity: Vec<Severity>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::string_list")]
    pub log_types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<DetectionSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDir>,
}

impl ListDetectionsInput {
    /// True when no filter is set; paging and sorting do not count
    pub fn has_no_filters(&self) -> bool {
        self.name_contains.is_none()
            && self.analysis_types.is_empty()
            && self.enabled.is_none()
            && self.severity.is_empty()
            && self.log_types.is_empty()
            && self.tags.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDetectionsResponse {
    pub detections: Vec<Detection>,
    pub paging: PagingData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteDetectionsInput {
    pub detections: Vec<DeleteEntry>,
}

impl DeleteDetectionsInput {
    pub fn from_detections(detections: &[Detection]) -> Self {
        Self {
            detections: detections.iter().map(|d| DeleteEntry::new(&d.id)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_input_skips_unset_fields() {
        let input = ListDetectionsInput {
            page: Some(2),
            severity: vec![Severity::High],
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "page": 2, "severity": ["HIGH"] })
        );
    }

    #[test]
    fn test_title_falls_back_to_id() {
        let detection: Detection = serde_json::from_value(json!({
            "id": "AWS.CloudTrail.Stopped",
            "displayName": "",
            "analysisType": "RULE",
            "enabled": true,
            "severity": "HIGH",
            "logTypes": ["AWS.CloudTrail"],
            "lastModified": "2020-10-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(detection.title(), "AWS.CloudTrail.Stopped");
        assert_eq!(detection.targets(), ["AWS.CloudTrail".to_string()]);
        assert!(detection.tags.is_empty());
    }
}
