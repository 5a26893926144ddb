use crate::shared::lenient;
use crate::shared::paging::{PagingData, SortDir};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPackVersion {
    pub id: u32,
    pub sem_ver: String,
}

/// How many entities of each kind a pack ships
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct AnalysisPackTypes {
    #[serde(default)]
    pub rule: Option<u32>,
    #[serde(default)]
    pub policy: Option<u32>,
    #[serde(default)]
    pub global: Option<u32>,
    #[serde(default)]
    pub datamodel: Option<u32>,
}

impl AnalysisPackTypes {
    /// Non-zero counts with their plural label, in display order
    pub fn counts(&self) -> Vec<(u32, &'static str)> {
        [
            (self.rule, "RULES"),
            (self.policy, "POLICIES"),
            (self.global, "HELPERS"),
            (self.datamodel, "DATA MODELS"),
        ]
        .into_iter()
        .filter_map(|(count, label)| count.filter(|n| *n > 0).map(|n| (n, label)))
        .collect()
    }
}

/// Bundle of detections, helpers and data models released together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPack {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: String,
    pub enabled: bool,
    #[serde(default)]
    pub update_available: bool,
    pub pack_version: AnalysisPackVersion,
    #[serde(default)]
    pub available_versions: Vec<AnalysisPackVersion>,
    #[serde(default)]
    pub pack_types: AnalysisPackTypes,
    pub last_modified: DateTime<Utc>,
}

impl AnalysisPack {
    pub fn title(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListAnalysisPacksInput {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDir>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListAnalysisPacksResponse {
    pub packs: Vec<AnalysisPack>,
    #[serde(default)]
    pub paging: PagingData,
}

/// Either flips `enabled` or moves the pack to another version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnalysisPackInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<u32>,
}

impl UpdateAnalysisPackInput {
    pub fn toggle_enabled(pack: &AnalysisPack) -> Self {
        Self {
            id: pack.id.clone(),
            enabled: Some(!pack.enabled),
            version_id: None,
        }
    }

    pub fn to_version(pack: &AnalysisPack, version: &AnalysisPackVersion) -> Self {
        Self {
            id: pack.id.clone(),
            enabled: None,
            version_id: Some(version.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pack() -> AnalysisPack {
        serde_json::from_value(json!({
            "id": "panther-core",
            "displayName": "",
            "enabled": true,
            "packVersion": { "id": 3, "semVer": "v1.2.0" },
            "packTypes": { "RULE": 12, "POLICY": 0, "GLOBAL": 2 },
            "lastModified": "2021-03-01T10:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_pack_decodes_with_defaults() {
        let pack = pack();
        assert_eq!(pack.title(), "panther-core");
        assert!(!pack.update_available);
        assert!(pack.available_versions.is_empty());
        assert_eq!(pack.pack_types.counts(), vec![(12, "RULES"), (2, "HELPERS")]);
    }

    #[test]
    fn test_update_input_sends_only_the_changed_field() {
        let pack = pack();
        assert_eq!(
            serde_json::to_value(UpdateAnalysisPackInput::toggle_enabled(&pack)).unwrap(),
            json!({ "id": "panther-core", "enabled": false })
        );
        let version = AnalysisPackVersion {
            id: 4,
            sem_ver: "v1.3.0".to_string(),
        };
        assert_eq!(
            serde_json::to_value(UpdateAnalysisPackInput::to_version(&pack, &version)).unwrap(),
            json!({ "id": "panther-core", "versionId": 4 })
        );
    }
}
