//! Session identity of the signed-in user

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Role of the current user, as stored in session storage at sign-in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    #[default]
    Visitor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Visitor => "visitor",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Role {
    /// Any role string other than admin/visitor is a regular signed-in user
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "visitor" | "" => Role::Visitor,
            _ => Role::User,
        }
    }
}

/// User record kept in session storage under the `user` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Explicit identity context threaded through view composition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct SessionContext {
    pub role: Role,
    pub email: Option<String>,
    /// Email awaiting verification after registration
    pub pending_email: Option<String>,
}

impl SessionContext {
    pub fn visitor() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Sign-in request (what the login screen records once the API accepted it)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignIn {
    #[validate(length(min = 1, max = 32))]
    pub role: String,
    #[validate(email)]
    pub email: Option<String>,
}

/// Pending registration email request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PendingEmail {
    #[validate(email)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("Admin"), Role::Admin);
        assert_eq!(Role::from("reader"), Role::User);
        assert_eq!(Role::from("visitor"), Role::Visitor);
        assert_eq!(Role::from(""), Role::Visitor);
    }

    #[test]
    fn test_sign_in_validation() {
        let ok = SignIn {
            role: "admin".to_string(),
            email: Some("admin@example.org".to_string()),
        };
        assert!(ok.validate().is_ok());

        let bad = SignIn {
            role: String::new(),
            email: Some("not-an-email".to_string()),
        };
        assert!(bad.validate().is_err());
    }
}
