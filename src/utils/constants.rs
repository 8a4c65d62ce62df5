/// Base URL of the REST API.
/// Set at compile time through `API_BASE_URL` (or `.env`), defaults to the local backend.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:4000",
};

/// Storage key holding the serialized session snapshot
pub const STORAGE_KEY_SESSION: &str = match option_env!("AUTH_STORAGE_KEY") {
    Some(key) => key,
    None => "hrms.auth.session",
};

pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Auth endpoints used by the request core and the session context
pub const AUTH_REFRESH_PATH: &str = "/api/auth/refresh";
pub const AUTH_LOGIN_PATH: &str = "/api/auth/login";
pub const AUTH_REGISTER_PATH: &str = "/api/auth/register";
pub const AUTH_LOGOUT_PATH: &str = "/api/auth/logout";
pub const AUTH_ME_PATH: &str = "/api/auth/me";
