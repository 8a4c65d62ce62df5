use crate::error::ApiResult;
use crate::models::{ListQuery, NewPayrollRun, Page, PayrollRun, Payslip};
use crate::services::api_client::{ApiClient, RequestOptions};
use crate::services::transport::HttpMethod;

const PAYROLL_RUNS_PATH: &str = "/api/payroll/runs";
const PAYSLIPS_PATH: &str = "/api/payroll/payslips";

/// Payroll runs and payslips
#[derive(Clone)]
pub struct PayrollService {
    client: ApiClient,
}

impl PayrollService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List payroll runs (paged)
    pub async fn runs(&self, query: &ListQuery) -> ApiResult<Page<PayrollRun>> {
        self.client.get_page(&query.apply(PAYROLL_RUNS_PATH)).await
    }

    /// Fetch one payroll run
    pub async fn run(&self, id: &str) -> ApiResult<PayrollRun> {
        self.client.get(&run_path(id)).await
    }

    /// Starts a payroll run; amounts are computed server-side
    pub async fn create_run(&self, run: &NewPayrollRun) -> ApiResult<PayrollRun> {
        log::info!("💰 Creating payroll run {} → {}", run.period_start, run.period_end);
        self.client.post(PAYROLL_RUNS_PATH, run).await
    }

    /// Lock a run; finalized runs are read-only
    pub async fn finalize_run(&self, id: &str) -> ApiResult<PayrollRun> {
        self.client
            .send(&format!("{}/finalize", run_path(id)), RequestOptions::new(HttpMethod::Post))
            .await
    }

    /// List payslips (paged)
    pub async fn payslips(&self, query: &ListQuery) -> ApiResult<Page<Payslip>> {
        self.client.get_page(&query.apply(PAYSLIPS_PATH)).await
    }
}

fn run_path(id: &str) -> String {
    format!("{}/{}", PAYROLL_RUNS_PATH, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_transport::MockTransport;
    use crate::stores::AuthStore;
    use crate::utils::storage::MemoryStorage;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn finalize_posts_without_body() {
        let store = AuthStore::with_storage(Rc::new(MemoryStorage::new()));
        let transport = MockTransport::new();
        let client = ApiClient::new("http://api.test", Rc::new(transport.clone()), store);
        let service = PayrollService::new(client);
        transport.reply_json(
            200,
            json!({"success": true, "data": {
                "id": "run-7", "period_start": "2024-05-01", "period_end": "2024-05-31",
                "status": "finalized", "total_net": 12500.5
            }}),
        );

        let run = block_on(service.finalize_run("run-7")).unwrap();

        let sent = transport.request(0);
        assert_eq!(sent.url, "http://api.test/api/payroll/runs/run-7/finalize");
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.body, None);
        assert_eq!(run.status, "finalized");
        assert_eq!(run.total_net, Some(12500.5));
    }
}
