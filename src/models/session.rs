use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_TOKEN_TYPE;

/// Identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub company_slug: String,
    pub role_id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Access token lifetime in seconds
    #[serde(default)]
    pub expires_in: u64,
}

fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}

/// Who is logged in, as persisted by the auth store and returned by
/// login, register and refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: SessionUser,
    pub tokens: SessionTokens,
}

impl SessionSnapshot {
    /// Access token, if non-empty
    pub fn access_token(&self) -> Option<&str> {
        Some(self.tokens.access_token.as_str()).filter(|t| !t.is_empty())
    }

    /// Refresh token, if non-empty
    pub fn refresh_token(&self) -> Option<&str> {
        Some(self.tokens.refresh_token.as_str()).filter(|t| !t.is_empty())
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.user.permissions.iter().any(|p| p == permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_defaults_for_optional_fields() {
        let snapshot: SessionSnapshot = serde_json::from_value(json!({
            "user": {
                "id": "u-1",
                "company_slug": "acme",
                "role_id": "admin",
                "full_name": "Ada Lovelace",
                "email": "ada@acme.test"
            },
            "tokens": { "access_token": "A", "refresh_token": "R" }
        }))
        .unwrap();

        assert!(snapshot.user.permissions.is_empty());
        assert_eq!(snapshot.tokens.token_type, "Bearer");
        assert_eq!(snapshot.tokens.expires_in, 0);
    }

    #[test]
    fn empty_tokens_read_as_absent() {
        let mut snapshot: SessionSnapshot = serde_json::from_value(json!({
            "user": {
                "id": "u-1", "company_slug": "acme", "role_id": "r",
                "full_name": "A", "email": "a@acme.test",
                "permissions": ["employees.read"]
            },
            "tokens": { "access_token": "", "refresh_token": "R", "token_type": "Bearer", "expires_in": 900 }
        }))
        .unwrap();

        assert_eq!(snapshot.access_token(), None);
        assert_eq!(snapshot.refresh_token(), Some("R"));
        assert!(snapshot.has_permission("employees.read"));
        assert!(!snapshot.has_permission("payroll.write"));

        snapshot.tokens.refresh_token.clear();
        assert_eq!(snapshot.refresh_token(), None);
    }
}
