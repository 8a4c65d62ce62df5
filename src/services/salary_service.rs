// Salary history lives under the employee resource

use crate::error::ApiResult;
use crate::models::{SalaryInput, SalaryRecord};
use crate::services::api_client::ApiClient;
use crate::services::employee_service::employee_path;

/// Salary history per employee
#[derive(Clone)]
pub struct SalaryService {
    client: ApiClient,
}

impl SalaryService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Salary history, newest first as returned by the server
    pub async fn history(&self, employee_id: &str) -> ApiResult<Vec<SalaryRecord>> {
        self.client.get(&format!("{}/salary", employee_path(employee_id))).await
    }

    /// Record a new salary entry
    pub async fn record(&self, employee_id: &str, salary: &SalaryInput) -> ApiResult<SalaryRecord> {
        self.client
            .post(&format!("{}/salary", employee_path(employee_id)), salary)
            .await
    }
}
