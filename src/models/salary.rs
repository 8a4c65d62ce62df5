use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SalaryRecord {
    pub id: String,
    pub employee_id: String,
    pub base_amount: f64,
    pub currency: String,
    pub effective_from: NaiveDate,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SalaryInput {
    pub base_amount: f64,
    pub currency: String,
    pub effective_from: NaiveDate,
}
