//! User-related types returned by the Service Desk API.

use serde::{Deserialize, Serialize};

/// Unique numeric identifier for a user account.
pub type UserID = i64;

/// A user account record returned by the `/users.json` endpoints.
///
/// The API returns many more fields than listed here; unknown fields are
/// ignored on deserialization.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    /// Unique numeric identifier.
    pub id: UserID,

    /// Primary email address, also the account's login identifier.
    pub email: String,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Whether the account has been disabled. Deletion is only permitted
    /// for disabled accounts.
    #[serde(default)]
    pub disabled: bool,

    /// Assigned role, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    /// Department the user belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,

    /// Creation timestamp as reported by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// True when the account has not been disabled.
    pub fn is_active(&self) -> bool {
        !self.disabled
    }
}

/// A role assigned to a user (e.g. "Administrator", "Requester").
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// A department a user belongs to.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// Outgoing user record for create and update requests. Unset fields are
/// omitted from the request body, leaving the server-side values untouched.
#[derive(Serialize, Default)]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Role name to assign (e.g. "Requester").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl UserPayload {
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }
}

/// The `{"user": ...}` envelope the API expects around outgoing records.
#[derive(Serialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}
