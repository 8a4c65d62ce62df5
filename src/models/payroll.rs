use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PayrollRun {
    pub id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub status: String,
    #[serde(default)]
    pub total_gross: Option<f64>,
    #[serde(default)]
    pub total_net: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewPayrollRun {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Payslip {
    pub id: String,
    pub payroll_run_id: String,
    pub employee_id: String,
    pub gross: f64,
    pub net: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
