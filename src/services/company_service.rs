use crate::error::ApiResult;
use crate::models::envelope::build_query;
use crate::models::{CompanyProfile, CompanyProfileUpdate, ExportKind, FileDownload};
use crate::services::api_client::ApiClient;

const COMPANY_PROFILE_PATH: &str = "/api/company/profile";
const COMPANY_EXPORT_PATH: &str = "/api/company/export";

/// Company profile and data exports
#[derive(Clone)]
pub struct CompanyService {
    client: ApiClient,
}

impl CompanyService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Profile of the signed-in company
    pub async fn profile(&self) -> ApiResult<CompanyProfile> {
        self.client.get(COMPANY_PROFILE_PATH).await
    }

    /// Update the company profile
    pub async fn update_profile(&self, changes: &CompanyProfileUpdate) -> ApiResult<CompanyProfile> {
        self.client.patch(COMPANY_PROFILE_PATH, changes).await
    }

    /// CSV export; `params` become query parameters (date range, department, ...)
    pub async fn export_csv(&self, kind: ExportKind, params: &[(String, String)]) -> ApiResult<FileDownload> {
        let path = format!("{}/{}{}", COMPANY_EXPORT_PATH, kind.path_segment(), build_query(params));
        log::info!("📤 Exporting {}", kind.path_segment());
        self.client.download(&path).await
    }
}
