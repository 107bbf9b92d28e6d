use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An incident reported on site.
///
/// Attached documents are opaque upload descriptors owned by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub signaled_by: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub project_name: String,
    pub sub_project_name: String,
    pub description: String,
    #[serde(default)]
    pub documents: Vec<Value>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentFollowUp {
    pub id: String,
    pub incident_id: String,
    pub report_date: String,
    pub description: String,
    #[serde(default)]
    pub documents: Vec<Value>,
    pub created_at: String,
}
