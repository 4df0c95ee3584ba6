//! User types

use serde::{Deserialize, Serialize};

/// Locally unique user identifier (never reused)
pub type UserId = u32;

/// Permission level
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    #[default]
    Viewer,
}

/// Account status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    /// Cannot sign in
    Suspended,
}

/// A managed user account
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    /// Creation time (ms since epoch, supplied by the caller)
    pub created_at: f64,
}

impl User {
    /// Active admins count towards the last-admin guard
    #[inline]
    pub fn is_active_admin(&self) -> bool {
        self.role == Role::Admin && self.status == UserStatus::Active
    }
}

/// Fields for creating a user
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewUser {
    pub username: String,
    /// Falls back to the username when empty
    #[serde(default)]
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Partial update; `None` fields are left alone
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

/// List filter used by the user manager's search box and dropdowns
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserFilter {
    /// Case-insensitive match on username, display name, or email
    #[serde(default)]
    pub query: String,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        if self.role.is_some_and(|r| r != user.role) {
            return false;
        }
        if self.status.is_some_and(|s| s != user.status) {
            return false;
        }
        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || user.username.to_lowercase().contains(&query)
            || user.display_name.to_lowercase().contains(&query)
            || user.email.to_lowercase().contains(&query)
    }
}
