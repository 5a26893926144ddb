use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Python helper module shared by all detections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalPythonModule {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub last_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteGlobalModuleInput {
    pub id: String,
}
