//! User model matching the frontend User interface.
//!
//! `User` is the representation exposed to callers and never carries a
//! password. `StoredUser` is the durable/seed representation; its optional
//! plaintext password exists only for the mock credential check and is
//! stripped before a user leaves this layer.

use serde::{Deserialize, Serialize};

/// Role of a user account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Contributor,
    Public,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Contributor => "contributor",
            UserRole::Public => "public",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "contributor" => Some(UserRole::Contributor),
            "public" => Some(UserRole::Public),
            _ => None,
        }
    }
}

/// A user account as exposed to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub organization_id: Option<String>,
    pub is_active: bool,
    pub email_verified: Option<bool>,
    pub last_login_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// The durable representation of a user, including the mock credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    #[serde(flatten)]
    pub user: User,
    /// Plaintext only in the mock seed/storage representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl StoredUser {
    /// Strip the password and expose the plain user.
    pub fn into_user(self) -> User {
        self.user
    }

    pub fn as_user(&self) -> &User {
        &self.user
    }
}

impl From<User> for StoredUser {
    fn from(user: User) -> Self {
        Self {
            user,
            password: None,
        }
    }
}

/// Form data for creating a new user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Partial form data for updating an existing user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Active filter predicate for user listings. Matching is conjunctive.
#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    pub role: Option<UserRole>,
    pub organization_id: Option<String>,
    pub is_active: Option<bool>,
    /// Case-insensitive substring match on email and name.
    pub search: Option<String>,
}

impl UserFilters {
    pub fn is_empty(&self) -> bool {
        self.role.is_none()
            && self.organization_id.is_none()
            && self.is_active.is_none()
            && self.search.is_none()
    }

    /// Check whether a user matches the active predicate.
    pub fn matches(&self, user: &User) -> bool {
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }
        if let Some(organization_id) = &self.organization_id {
            if user.organization_id.as_deref() != Some(organization_id.as_str()) {
                return false;
            }
        }
        if let Some(is_active) = self.is_active {
            if user.is_active != is_active {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let search = search.to_lowercase();
            let in_email = user.email.to_lowercase().contains(&search);
            let in_name = user
                .name
                .as_ref()
                .map(|n| n.to_lowercase().contains(&search))
                .unwrap_or(false);
            if !in_email && !in_name {
                return false;
            }
        }
        true
    }
}
