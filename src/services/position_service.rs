use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{ListQuery, Page, Position, PositionInput};
use crate::services::api_client::ApiClient;

const POSITIONS_PATH: &str = "/api/positions";

/// Job positions of the signed-in company
#[derive(Clone)]
pub struct PositionService {
    client: ApiClient,
}

impl PositionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List positions (paged)
    pub async fn list(&self, query: &ListQuery) -> ApiResult<Page<Position>> {
        self.client.get_page(&query.apply(POSITIONS_PATH)).await
    }

    /// Create a position
    pub async fn create(&self, position: &PositionInput) -> ApiResult<Position> {
        self.client.post(POSITIONS_PATH, position).await
    }

    /// Update a position
    pub async fn update(&self, id: &str, changes: &PositionInput) -> ApiResult<Position> {
        self.client.patch(&position_path(id), changes).await
    }

    /// Delete a position
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete::<Value>(&position_path(id)).await.map(|_| ())
    }
}

fn position_path(id: &str) -> String {
    format!("{}/{}", POSITIONS_PATH, urlencoding::encode(id))
}
