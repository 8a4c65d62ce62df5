//! Client error model.
//! Every failed call returns an [`ApiError`] whose [`ErrorKind`] is a closed set,
//! so callers can match exhaustively instead of sniffing messages.

use serde_json::Value;
use thiserror::Error;

/// Status reported when no HTTP response was received
pub const TRANSPORT_STATUS: u16 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response obtained (DNS, refused connection, timeout)
    Transport,
    /// 2xx body is not an envelope with a `data` field
    InvalidEnvelope,
    /// Server answered with a non-2xx status
    Application,
    /// Refresh failed or no refresh token was available
    Unauthorized,
    /// Envelope is fine but `data` does not fit the requested type
    Decode,
    /// Request body could not be serialized
    Encode,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    /// HTTP status, `0` for transport failures
    pub status: u16,
    pub details: Option<Value>,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(kind: ErrorKind, status: u16, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), status, details: None }
    }

    pub fn with_details(mut self, details: Option<Value>) -> Self {
        self.details = details;
        self
    }

    pub fn transport(base_url: &str, cause: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorKind::Transport,
            TRANSPORT_STATUS,
            format!("Unable to reach the API at {}: {}", base_url, cause),
        )
    }

    pub fn invalid_envelope(status: u16) -> Self {
        Self::new(ErrorKind::InvalidEnvelope, status, "Invalid API response format")
    }

    pub fn application(status: u16, message: Option<String>, details: Option<Value>) -> Self {
        let message = message.unwrap_or_else(|| format!("Request failed with status {}", status));
        Self::new(ErrorKind::Application, status, message).with_details(details)
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorKind::Unauthorized, 401, "Session expired, please sign in again")
    }

    pub fn decode(status: u16, err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Decode, status, format!("Unexpected response data: {}", err))
    }

    pub fn encode(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Encode, TRANSPORT_STATUS, format!("Could not serialize request body: {}", err))
    }

    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::Transport
    }

    /// True when the caller should send the user back to the sign-in screen
    pub fn requires_sign_in(&self) -> bool {
        match self.kind {
            ErrorKind::Unauthorized => true,
            ErrorKind::Application => self.status == 401,
            ErrorKind::Transport | ErrorKind::InvalidEnvelope | ErrorKind::Decode | ErrorKind::Encode => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transport_error_has_status_zero_and_names_endpoint() {
        let err = ApiError::transport("http://localhost:4000", "connection refused");
        assert_eq!(err.status, 0);
        assert_eq!(err.kind, ErrorKind::Transport);
        assert!(err.message.contains("http://localhost:4000"));
        assert!(err.message.contains("connection refused"));
        assert!(err.is_transport());
    }

    #[test]
    fn application_error_falls_back_to_generic_message() {
        let err = ApiError::application(503, None, None);
        assert_eq!(err.to_string(), "Request failed with status 503");

        let err = ApiError::application(422, Some("Bad input".into()), Some(json!({"field": "email"})));
        assert_eq!(err.to_string(), "Bad input");
        assert_eq!(err.details, Some(json!({"field": "email"})));
    }

    #[test]
    fn sign_in_required_only_for_auth_failures() {
        assert!(ApiError::unauthorized().requires_sign_in());
        assert!(ApiError::application(401, None, None).requires_sign_in());
        assert!(!ApiError::application(403, None, None).requires_sign_in());
        assert!(!ApiError::invalid_envelope(200).requires_sign_in());
    }
}
