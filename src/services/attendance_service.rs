use crate::error::ApiResult;
use crate::models::envelope::build_query;
use crate::models::{AttendanceFilter, AttendanceRecord, AttendanceSummary, ClockRequest, ListQuery, Page};
use crate::services::api_client::ApiClient;

const ATTENDANCE_PATH: &str = "/api/attendance";

/// Attendance records and clocking
#[derive(Clone)]
pub struct AttendanceService {
    client: ApiClient,
}

impl AttendanceService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List attendance records matching `filter` (paged)
    pub async fn list(&self, filter: &AttendanceFilter, query: &ListQuery) -> ApiResult<Page<AttendanceRecord>> {
        let mut query = query.clone();
        query.filters.extend(filter.pairs());
        self.client.get_page(&query.apply(ATTENDANCE_PATH)).await
    }

    /// Aggregated attendance for the filter window
    pub async fn summary(&self, filter: &AttendanceFilter) -> ApiResult<AttendanceSummary> {
        let path = format!("{}/summary{}", ATTENDANCE_PATH, build_query(&filter.pairs()));
        self.client.get(&path).await
    }

    /// Clock in the signed-in employee
    pub async fn check_in(&self, request: &ClockRequest) -> ApiResult<AttendanceRecord> {
        log::info!("🕘 Check-in");
        self.client.post(&format!("{}/check-in", ATTENDANCE_PATH), request).await
    }

    /// Clock out the signed-in employee
    pub async fn check_out(&self, request: &ClockRequest) -> ApiResult<AttendanceRecord> {
        log::info!("🕔 Check-out");
        self.client.post(&format!("{}/check-out", ATTENDANCE_PATH), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock_transport::MockTransport;
    use crate::stores::AuthStore;
    use crate::utils::storage::MemoryStorage;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn setup() -> (AttendanceService, MockTransport) {
        let store = AuthStore::with_storage(Rc::new(MemoryStorage::new()));
        let transport = MockTransport::new();
        let client = ApiClient::new("http://api.test", Rc::new(transport.clone()), store);
        (AttendanceService::new(client), transport)
    }

    #[test]
    fn summary_encodes_date_range() {
        let (service, transport) = setup();
        transport.reply_json(200, json!({"success": true, "data": {"present": 18, "late": 2}}));

        let filter = AttendanceFilter {
            from: NaiveDate::from_ymd_opt(2024, 5, 1),
            to: NaiveDate::from_ymd_opt(2024, 5, 31),
            employee_id: None,
        };
        let summary = block_on(service.summary(&filter)).unwrap();

        assert_eq!(
            transport.request(0).url,
            "http://api.test/api/attendance/summary?from=2024-05-01&to=2024-05-31"
        );
        assert_eq!(summary.present, 18);
        assert_eq!(summary.absent, 0);
    }

    #[test]
    fn check_in_returns_record() {
        let (service, transport) = setup();
        transport.reply_json(
            201,
            json!({"success": true, "data": {
                "id": "att-1", "employee_id": "e-1", "date": "2024-05-02",
                "check_in": "2024-05-02T08:58:00Z", "status": "present"
            }}),
        );

        let record = block_on(service.check_in(&ClockRequest::default())).unwrap();

        assert_eq!(record.status.as_deref(), Some("present"));
        assert!(record.check_out.is_none());
        assert_eq!(transport.body_json(0), json!({}));
    }
}
