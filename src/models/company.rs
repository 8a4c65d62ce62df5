use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyProfile {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CompanyProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// CSV exports offered by the company module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Employees,
    Attendance,
    Payroll,
}

impl ExportKind {
    pub fn path_segment(self) -> &'static str {
        match self {
            ExportKind::Employees => "employees",
            ExportKind::Attendance => "attendance",
            ExportKind::Payroll => "payroll",
        }
    }
}

/// Raw file returned by an export endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct FileDownload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileDownload {
    /// Body as UTF-8 text, lossy
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}
