// ============================================================================
// API CLIENT - Authenticated request core
// ============================================================================
// Bearer auth from the auth store, envelope unwrapping, and a single
// refresh-and-retry cycle on 401.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::envelope::decode_data;
use crate::models::{ApiPayload, FileDownload, Page, RefreshRequest, SessionSnapshot};
use crate::services::transport::{default_transport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::stores::{AuthEvent, AuthStore};
use crate::utils::content_disposition::{fallback_filename, parse_filename};
use crate::utils::{
    AUTH_REFRESH_PATH, CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_DISPOSITION,
    HEADER_CONTENT_TYPE,
};

/// Per-call options
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<Value>,
    /// Attach the bearer token when one is stored
    pub auth: bool,
    /// Allow one refresh-and-retry cycle on 401
    pub retry_on_unauthorized: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            body: None,
            auth: true,
            retry_on_unauthorized: true,
        }
    }
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self { method, ..Self::default() }
    }

    pub fn get() -> Self {
        Self::new(HttpMethod::Get)
    }

    pub fn post(body: Value) -> Self {
        Self::new(HttpMethod::Post).with_body(body)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn without_auth(mut self) -> Self {
        self.auth = false;
        self
    }

    pub fn without_retry(mut self) -> Self {
        self.retry_on_unauthorized = false;
        self
    }
}

/// Result of the refresh procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New tokens stored and `tokens-updated` emitted
    Refreshed,
    /// No refresh token, or the server refused it
    Rejected,
}

type SharedRefresh = Shared<LocalBoxFuture<'static, ApiResult<RefreshOutcome>>>;

struct ClientInner {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    store: AuthStore,
    // In-flight refresh shared by every caller that hits a 401 meanwhile
    refresh_in_flight: RefCell<Option<(u64, SharedRefresh)>>,
    refresh_generation: Cell<u64>,
}

/// Cheap to clone; clones share transport, store and the in-flight refresh.
#[derive(Clone)]
pub struct ApiClient {
    inner: Rc<ClientInner>,
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>, transport: Rc<dyn HttpTransport>, store: AuthStore) -> Self {
        Self {
            inner: Rc::new(ClientInner {
                base_url: crate::config::normalize_base_url(base_url.as_ref()),
                transport,
                store,
                refresh_in_flight: RefCell::new(None),
                refresh_generation: Cell::new(0),
            }),
        }
    }

    /// Client on the platform transport
    pub fn from_config(config: &AppConfig, store: AuthStore) -> Self {
        Self::new(&config.api_base_url, default_transport(config), store)
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn store(&self) -> &AuthStore {
        &self.inner.store
    }

    /// Executes `path` and unwraps the response envelope
    pub async fn request(&self, path: &str, options: RequestOptions) -> ApiResult<ApiPayload> {
        let response = self.execute(path, &options).await?;
        unwrap_envelope(response)
    }

    /// Like `request`, decoding `data` into `T`. An empty (204) response decodes from `null`.
    pub async fn send<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> ApiResult<T> {
        let response = self.execute(path, &options).await?;
        let status = response.status;
        let payload = unwrap_envelope(response)?;
        decode_data(payload.into_data()).map_err(|e| ApiError::decode(status, e))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(path, RequestOptions::get()).await
    }

    /// GET a list endpoint, keeping pagination when the server sends it
    pub async fn get_page<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Page<T>> {
        let response = self.execute(path, &RequestOptions::get()).await?;
        let status = response.status;
        let payload = unwrap_envelope(response)?;
        let pagination = payload.pagination().copied();
        let data = match payload.into_data() {
            Value::Null => Vec::new(),
            data => decode_data(data).map_err(|e| ApiError::decode(status, e))?,
        };
        Ok(Page { data, pagination })
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(path, RequestOptions::new(HttpMethod::Post).with_body(to_body(body)?)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(path, RequestOptions::new(HttpMethod::Put).with_body(to_body(body)?)).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(path, RequestOptions::new(HttpMethod::Patch).with_body(to_body(body)?)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(path, RequestOptions::new(HttpMethod::Delete)).await
    }

    /// GET a raw file (CSV exports). The body bypasses the envelope; errors do not.
    pub async fn download(&self, path: &str) -> ApiResult<FileDownload> {
        let response = self.execute(path, &RequestOptions::get()).await?;
        if !response.is_success() {
            return Err(error_from_response(&response));
        }

        let filename = response
            .header(HEADER_CONTENT_DISPOSITION)
            .and_then(parse_filename)
            .unwrap_or_else(|| fallback_filename(path));
        let content_type = response.header(HEADER_CONTENT_TYPE).map(str::to_string);
        log::info!("📄 Downloaded {} ({} bytes)", filename, response.body.len());

        Ok(FileDownload {
            filename,
            content_type,
            bytes: response.body,
        })
    }

    /// attempt → (401) refresh → retry once with retries disabled
    async fn execute(&self, path: &str, options: &RequestOptions) -> ApiResult<HttpResponse> {
        let response = self.send_once(path, options).await?;

        let may_refresh = response.status == 401 && options.auth && options.retry_on_unauthorized;
        if !may_refresh {
            return Ok(response);
        }

        log::warn!("🔒 {} {} returned 401, refreshing session", options.method.as_str(), path);
        match self.refresh_session().await? {
            RefreshOutcome::Refreshed => {}
            RefreshOutcome::Rejected => return Err(ApiError::unauthorized()),
        }

        let retry = options.clone().without_retry();
        self.send_once(path, &retry).await
    }

    async fn send_once(&self, path: &str, options: &RequestOptions) -> ApiResult<HttpResponse> {
        let mut headers = vec![(HEADER_CONTENT_TYPE.to_string(), CONTENT_TYPE_JSON.to_string())];

        if options.auth {
            // Read at call time so a refresh between calls is picked up
            let token = self
                .inner
                .store
                .get()
                .and_then(|s| s.access_token().map(str::to_string));
            if let Some(token) = token {
                headers.push((HEADER_AUTHORIZATION.to_string(), format!("Bearer {}", token)));
            }
        }

        let request = HttpRequest {
            method: options.method,
            url: format!("{}{}", self.inner.base_url, path),
            headers,
            body: options.body.as_ref().map(Value::to_string),
        };

        log::debug!("➡️ {} {}", request.method.as_str(), request.url);
        self.inner
            .transport
            .send(request)
            .await
            .map_err(|e| {
                log::error!("❌ Network error on {}: {}", path, e);
                ApiError::transport(&self.inner.base_url, e)
            })
    }

    /// Exchanges the stored refresh token for a new session.
    /// Concurrent callers share one in-flight exchange.
    pub async fn refresh_session(&self) -> ApiResult<RefreshOutcome> {
        let (generation, refresh) = {
            let mut slot = self.inner.refresh_in_flight.borrow_mut();
            match slot.as_ref() {
                Some((generation, existing)) => (*generation, existing.clone()),
                None => {
                    let generation = self.inner.refresh_generation.get() + 1;
                    self.inner.refresh_generation.set(generation);

                    let weak = Rc::downgrade(&self.inner);
                    let refresh = run_refresh(weak).boxed_local().shared();
                    *slot = Some((generation, refresh.clone()));
                    (generation, refresh)
                }
            }
        };

        let outcome = refresh.await;

        let mut slot = self.inner.refresh_in_flight.borrow_mut();
        if matches!(slot.as_ref(), Some((current, _)) if *current == generation) {
            *slot = None;
        }
        outcome
    }
}

async fn run_refresh(inner: Weak<ClientInner>) -> ApiResult<RefreshOutcome> {
    let Some(inner) = inner.upgrade() else {
        return Ok(RefreshOutcome::Rejected);
    };
    let client = ApiClient { inner };
    let store = client.store();

    let Some(refresh_token) = store
        .get()
        .and_then(|s| s.refresh_token().map(str::to_string))
    else {
        log::warn!("⚠️ No refresh token stored, cannot refresh session");
        return Ok(RefreshOutcome::Rejected);
    };

    let body = to_body(&RefreshRequest { refresh_token })?;
    let options = RequestOptions::post(body).without_auth().without_retry();
    let response = client.send_once(AUTH_REFRESH_PATH, &options).await?;

    if !response.is_success() {
        log::warn!("🔒 Refresh rejected with status {}, signing out", response.status);
        store.clear();
        store.emit(AuthEvent::SignedOut);
        return Ok(RefreshOutcome::Rejected);
    }

    let status = response.status;
    let payload = unwrap_envelope(response)?;
    let snapshot: SessionSnapshot =
        decode_data(payload.into_data()).map_err(|_| ApiError::invalid_envelope(status))?;

    store.set(&snapshot);
    store.emit(AuthEvent::TokensUpdated);
    log::info!("🔑 Session refreshed for {}", snapshot.user.email);
    Ok(RefreshOutcome::Refreshed)
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> ApiResult<Value> {
    serde_json::to_value(body).map_err(ApiError::encode)
}

/// Envelope rules: 204 → empty, non-2xx → error, 2xx → object with `data`
pub(crate) fn unwrap_envelope(response: HttpResponse) -> ApiResult<ApiPayload> {
    let status = response.status;
    if status == 204 {
        return Ok(ApiPayload::Empty);
    }
    if !response.is_success() {
        return Err(error_from_response(&response));
    }

    let payload: Value =
        serde_json::from_slice(&response.body).map_err(|_| ApiError::invalid_envelope(status))?;
    let Value::Object(mut fields) = payload else {
        return Err(ApiError::invalid_envelope(status));
    };
    let Some(data) = fields.remove("data") else {
        return Err(ApiError::invalid_envelope(status));
    };

    match fields.remove("pagination") {
        None | Some(Value::Null) => Ok(ApiPayload::Data(data)),
        Some(raw) => match serde_json::from_value(raw) {
            Ok(pagination) => Ok(ApiPayload::Paginated { data, pagination }),
            Err(e) => {
                log::warn!("⚠️ Ignoring unreadable pagination: {}", e);
                Ok(ApiPayload::Data(data))
            }
        },
    }
}

/// Application error from a non-2xx response; the body is parsed best-effort
fn error_from_response(response: &HttpResponse) -> ApiError {
    let payload: Value = serde_json::from_slice(&response.body).unwrap_or(Value::Null);
    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string);
    let details = payload.get("details").filter(|d| !d.is_null()).cloned();

    log::warn!(
        "⚠️ Request failed with status {}: {}",
        response.status,
        message.as_deref().unwrap_or("<no message>")
    );
    ApiError::application(response.status, message, details)
}
