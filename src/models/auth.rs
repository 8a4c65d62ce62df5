use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub company_slug: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("company_slug", &self.company_slug)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Company sign-up: creates the company and its first administrator
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub company_name: String,
    pub company_slug: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("company_name", &self.company_name)
            .field("company_slug", &self.company_slug)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_passwords() {
        let login = LoginRequest {
            company_slug: "acme".into(),
            email: "ada@acme.test".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{:?}", login);
        assert!(printed.contains("ada@acme.test"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn logout_omits_missing_refresh_token() {
        let body = serde_json::to_value(LogoutRequest { refresh_token: None }).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }
}
