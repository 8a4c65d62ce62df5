use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
    /// Derived by the backend (present, late, absent, ...)
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AttendanceSummary {
    #[serde(default)]
    pub present: u64,
    #[serde(default)]
    pub late: u64,
    #[serde(default)]
    pub absent: u64,
    #[serde(default)]
    pub on_leave: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ClockRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Date range filter for attendance listings
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AttendanceFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub employee_id: Option<String>,
}

impl AttendanceFilter {
    pub(crate) fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = self.from {
            pairs.push(("from".to_string(), from.to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to".to_string(), to.to_string()));
        }
        if let Some(ref employee_id) = self.employee_id {
            pairs.push(("employee_id".to_string(), employee_id.clone()));
        }
        pairs
    }
}
