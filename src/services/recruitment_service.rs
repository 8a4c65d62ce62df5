use crate::error::ApiResult;
use crate::models::{ApplicationUpdate, JobApplication, JobOpening, ListQuery, NewJobOpening, Page};
use crate::services::api_client::ApiClient;

const JOBS_PATH: &str = "/api/recruitment/jobs";
const APPLICATIONS_PATH: &str = "/api/recruitment/applications";

/// Job openings and their applications
#[derive(Clone)]
pub struct RecruitmentService {
    client: ApiClient,
}

impl RecruitmentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List job openings (paged)
    pub async fn jobs(&self, query: &ListQuery) -> ApiResult<Page<JobOpening>> {
        self.client.get_page(&query.apply(JOBS_PATH)).await
    }

    /// Publish a job opening
    pub async fn create_job(&self, job: &NewJobOpening) -> ApiResult<JobOpening> {
        self.client.post(JOBS_PATH, job).await
    }

    /// Applications received for a job (paged)
    pub async fn applications(&self, job_id: &str, query: &ListQuery) -> ApiResult<Page<JobApplication>> {
        let base = format!("{}/{}/applications", JOBS_PATH, urlencoding::encode(job_id));
        self.client.get_page(&query.apply(&base)).await
    }

    /// Move an application through the pipeline
    pub async fn update_application(&self, id: &str, changes: &ApplicationUpdate) -> ApiResult<JobApplication> {
        let path = format!("{}/{}", APPLICATIONS_PATH, urlencoding::encode(id));
        self.client.patch(&path, changes).await
    }
}
