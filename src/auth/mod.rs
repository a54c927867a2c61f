//! Mock session/auth layer backed by the durable key-value store.
//!
//! Simulates login/logout/session-check without a server: a session record
//! with an expiry timestamp plus the current user live under their own
//! storage keys, and their presence is the authentication proof. Credential
//! comparison uses constant-time equality to mitigate timing attacks, but
//! the stored credentials themselves are mock plaintext.

use chrono::{Duration, Utc};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::db::{load_mock_data, save_mock_data, MockDataPatch};
use crate::errors::AppError;
use crate::models::{Session, StoredUser, User, UserRole};
use crate::storage::{keys, SharedStorage};

/// Default session validity window.
pub const SESSION_DURATION_HOURS: i64 = 24;

/// Single error message for unknown email, inactive account and wrong
/// password; callers cannot distinguish which it was.
const INVALID_CREDENTIALS: &str = "Email ou mot de passe incorrect";

pub struct AuthStore {
    storage: SharedStorage,
    session_hours: i64,
}

impl AuthStore {
    pub fn new(storage: SharedStorage) -> Self {
        Self::with_session_hours(storage, SESSION_DURATION_HOURS)
    }

    pub fn with_session_hours(storage: SharedStorage, session_hours: i64) -> Self {
        Self {
            storage,
            session_hours,
        }
    }

    /// Authenticate against the stored user collection.
    ///
    /// On success the user's `last_login_at` is refreshed (a full user
    /// collection rewrite), and session plus password-stripped user are
    /// written under their keys.
    pub fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let mut data = load_mock_data(&*self.storage.borrow());

        let Some(index) = data.users.iter().position(|u| {
            u.as_user().email.eq_ignore_ascii_case(email) && u.as_user().is_active
        }) else {
            tracing::debug!("Login failed: no active user for email");
            return Err(AppError::InvalidCredentials(INVALID_CREDENTIALS.to_string()));
        };

        let matches = data.users[index]
            .password
            .as_deref()
            .map(|stored| constant_time_compare(stored, password))
            .unwrap_or(false);
        if !matches {
            tracing::debug!("Login failed: password mismatch");
            return Err(AppError::InvalidCredentials(INVALID_CREDENTIALS.to_string()));
        }

        let now = Utc::now();
        data.users[index].user.last_login_at = Some(now.to_rfc3339());
        let user = data.users[index].as_user().clone();

        let session = Session {
            user_id: user.id.clone(),
            email: user.email.clone(),
            expires_at: (now + Duration::hours(self.session_hours)).to_rfc3339(),
        };

        let mut storage = self.storage.borrow_mut();
        save_mock_data(
            &mut *storage,
            &MockDataPatch {
                users: Some(data.users),
                ..Default::default()
            },
        )?;
        storage.set(keys::SESSION, &serde_json::to_string(&session)?);
        storage.set(keys::CURRENT_USER, &serde_json::to_string(&user)?);

        tracing::info!(user_id = %user.id, "Login succeeded");
        Ok(user)
    }

    /// Create a new account without logging it in. Fails when the email is
    /// already taken, compared case-insensitively.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        let mut data = load_mock_data(&*self.storage.borrow());

        if data
            .users
            .iter()
            .any(|u| u.as_user().email.eq_ignore_ascii_case(email))
        {
            return Err(AppError::Duplicate("Cet email est déjà utilisé".to_string()));
        }

        let now = Utc::now().to_rfc3339();
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_lowercase(),
            name: Some(name.to_string()),
            role,
            organization_id: None,
            is_active: true,
            email_verified: Some(false),
            last_login_at: None,
            created_at: now.clone(),
            updated_at: now,
        };
        data.users.push(StoredUser {
            user: user.clone(),
            password: Some(password.to_string()),
        });

        save_mock_data(
            &mut *self.storage.borrow_mut(),
            &MockDataPatch {
                users: Some(data.users),
                ..Default::default()
            },
        )?;

        tracing::info!(user_id = %user.id, "Account registered");
        Ok(user)
    }

    /// Current session, if one exists and has not expired. An expired or
    /// unreadable session clears both auth keys.
    pub fn session(&self) -> Option<Session> {
        let blob = self.storage.borrow().get(keys::SESSION)?;

        let session: Session = match serde_json::from_str(&blob) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!("Unreadable session blob: {}; clearing", err);
                self.clear_auth_keys();
                return None;
            }
        };

        if session.is_expired() {
            tracing::debug!("Session expired; clearing");
            self.clear_auth_keys();
            return None;
        }

        Some(session)
    }

    /// Current authenticated user, if a valid session exists.
    pub fn current_user(&self) -> Option<User> {
        self.session()?;
        let blob = self.storage.borrow().get(keys::CURRENT_USER)?;
        match serde_json::from_str(&blob) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!("Unreadable current-user blob: {}", err);
                None
            }
        }
    }

    /// Drop both auth keys. Removal of the durable entries is the only
    /// logout there is.
    pub fn logout(&self) {
        self.clear_auth_keys();
        tracing::info!("Logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.current_user().map(|u| u.role == role).unwrap_or(false)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }

    fn clear_auth_keys(&self) {
        let mut storage = self.storage.borrow_mut();
        storage.remove(keys::SESSION);
        storage.remove(keys::CURRENT_USER);
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("Admin123!", "Admin123!"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("Admin123!", "Admin123?"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-password"));
    }

    #[test]
    fn test_constant_time_compare_empty() {
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("", "not-empty"));
    }
}
