use crate::domain::common::DeleteEntry;
use crate::shared::lenient;
use crate::shared::paging::{PagingData, SortDir};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named mapping that normalizes fields across log types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModel {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub enabled: bool,
    #[serde(default)]
    pub log_types: Vec<String>,
    pub last_modified: DateTime<Utc>,
}

impl DataModel {
    pub fn title(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataModelSortField {
    Id,
    LastModified,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDataModelsInput {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub name_contains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::string_list")]
    pub log_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<DataModelSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDir>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListDataModelsResponse {
    pub models: Vec<DataModel>,
    #[serde(default)]
    pub paging: PagingData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDataModelsInput {
    pub data_models: Vec<DeleteEntry>,
}

impl DeleteDataModelsInput {
    pub fn from_models(models: &[DataModel]) -> Self {
        Self {
            data_models: models.iter().map(|m| DeleteEntry::new(&m.id)).collect(),
        }
    }
}
