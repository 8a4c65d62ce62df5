use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct JobOpening {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub department_id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub openings: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct NewJobOpening {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openings: Option<u32>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub candidate_name: String,
    pub email: String,
    pub stage: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApplicationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
