use serde::{Deserialize, Serialize};

/// User-defined log schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomLogRecord {
    pub log_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reference_url: String,
    pub revision: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCustomLogInput {
    pub log_type: String,
    pub revision: u32,
}
