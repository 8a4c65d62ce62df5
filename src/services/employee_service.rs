use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{Employee, EmployeeUpdate, ListQuery, NewEmployee, Page};
use crate::services::api_client::ApiClient;

const EMPLOYEES_PATH: &str = "/api/employees";

/// Employee directory
#[derive(Clone)]
pub struct EmployeeService {
    client: ApiClient,
}

impl EmployeeService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List employees (paged, searchable)
    pub async fn list(&self, query: &ListQuery) -> ApiResult<Page<Employee>> {
        self.client.get_page(&query.apply(EMPLOYEES_PATH)).await
    }

    /// Fetch one employee
    pub async fn get(&self, id: &str) -> ApiResult<Employee> {
        self.client.get(&employee_path(id)).await
    }

    /// Create an employee record
    pub async fn create(&self, employee: &NewEmployee) -> ApiResult<Employee> {
        log::info!("👤 Creating employee {}", employee.email);
        self.client.post(EMPLOYEES_PATH, employee).await
    }

    /// Apply a partial update to an employee
    pub async fn update(&self, id: &str, changes: &EmployeeUpdate) -> ApiResult<Employee> {
        self.client.patch(&employee_path(id), changes).await
    }

    /// Delete an employee record
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete::<Value>(&employee_path(id)).await.map(|_| ())
    }
}

pub(crate) fn employee_path(id: &str) -> String {
    format!("{}/{}", EMPLOYEES_PATH, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_transport::MockTransport;
    use crate::services::transport::HttpMethod;
    use crate::stores::AuthStore;
    use crate::utils::storage::MemoryStorage;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn setup() -> (EmployeeService, MockTransport) {
        let store = AuthStore::with_storage(Rc::new(MemoryStorage::new()));
        let transport = MockTransport::new();
        let client = ApiClient::new("http://api.test", Rc::new(transport.clone()), store);
        (EmployeeService::new(client), transport)
    }

    #[test]
    fn list_passes_query_and_keeps_pagination() {
        let (service, transport) = setup();
        transport.reply_json(
            200,
            json!({
                "success": true,
                "data": [{"id": "e-1", "full_name": "Ada Lovelace", "email": "ada@acme.test", "badge": "A1"}],
                "pagination": {"page": 2, "limit": 1, "total": 5, "totalPages": 5}
            }),
        );

        let page = block_on(service.list(&ListQuery::new().page(2).limit(1))).unwrap();

        assert_eq!(transport.request(0).url, "http://api.test/api/employees?page=2&limit=1");
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].extra.get("badge"), Some(&json!("A1")));
        assert_eq!(page.pagination.unwrap().total, 5);
    }

    #[test]
    fn update_sends_only_changed_fields() {
        let (service, transport) = setup();
        transport.reply_json(
            200,
            json!({"success": true, "data": {"id": "e-1", "full_name": "Ada King", "email": "ada@acme.test"}}),
        );

        let changes = EmployeeUpdate { full_name: Some("Ada King".into()), ..Default::default() };
        let updated = block_on(service.update("e-1", &changes)).unwrap();

        assert_eq!(updated.full_name, "Ada King");
        assert_eq!(transport.request(0).method, HttpMethod::Patch);
        assert_eq!(transport.body_json(0), json!({"full_name": "Ada King"}));
    }

    #[test]
    fn ids_are_path_encoded() {
        assert_eq!(employee_path("a/b"), "/api/employees/a%2Fb");
    }
}
