use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{LoginRequest, LogoutRequest, RegisterRequest, SessionSnapshot, SessionUser};
use crate::services::api_client::{ApiClient, RequestOptions};
use crate::services::transport::HttpMethod;
use crate::utils::{AUTH_LOGIN_PATH, AUTH_LOGOUT_PATH, AUTH_ME_PATH, AUTH_REGISTER_PATH};

/// Auth endpoints. Never writes the auth store; the session context does.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Perform login; a 401 here means bad credentials, not an expired session
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<SessionSnapshot> {
        log::info!("🔐 Logging in {} ({})", credentials.email, credentials.company_slug);
        let body = serde_json::to_value(credentials).map_err(crate::error::ApiError::encode)?;
        self.client
            .send(
                AUTH_LOGIN_PATH,
                RequestOptions::post(body).without_auth().without_retry(),
            )
            .await
    }

    /// Register a new company with its first administrator
    pub async fn register(&self, details: &RegisterRequest) -> ApiResult<SessionSnapshot> {
        log::info!("📝 Registering company {}", details.company_name);
        let body = serde_json::to_value(details).map_err(crate::error::ApiError::encode)?;
        self.client
            .send(
                AUTH_REGISTER_PATH,
                RequestOptions::post(body).without_auth().without_retry(),
            )
            .await
    }

    /// Server-side logout (revokes the refresh token)
    pub async fn logout(&self, refresh_token: Option<String>) -> ApiResult<()> {
        let body = serde_json::to_value(LogoutRequest { refresh_token })
            .map_err(crate::error::ApiError::encode)?;
        let _: Value = self
            .client
            .send(
                AUTH_LOGOUT_PATH,
                RequestOptions::new(HttpMethod::Post).with_body(body).without_retry(),
            )
            .await?;
        Ok(())
    }

    /// Profile of the signed-in user
    pub async fn me(&self) -> ApiResult<SessionUser> {
        self.client.get(AUTH_ME_PATH).await
    }
}
