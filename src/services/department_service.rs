use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{Department, DepartmentInput, ListQuery, Page};
use crate::services::api_client::ApiClient;

const DEPARTMENTS_PATH: &str = "/api/departments";

/// Departments of the signed-in company
#[derive(Clone)]
pub struct DepartmentService {
    client: ApiClient,
}

impl DepartmentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List departments (paged)
    pub async fn list(&self, query: &ListQuery) -> ApiResult<Page<Department>> {
        self.client.get_page(&query.apply(DEPARTMENTS_PATH)).await
    }

    /// Create a department
    pub async fn create(&self, department: &DepartmentInput) -> ApiResult<Department> {
        self.client.post(DEPARTMENTS_PATH, department).await
    }

    /// Apply a partial update to a department
    pub async fn update(&self, id: &str, changes: &DepartmentInput) -> ApiResult<Department> {
        self.client.patch(&department_path(id), changes).await
    }

    /// Delete a department
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete::<Value>(&department_path(id)).await.map(|_| ())
    }
}

fn department_path(id: &str) -> String {
    format!("{}/{}", DEPARTMENTS_PATH, urlencoding::encode(id))
}
