//! Session model for the mock auth layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client-side session. Valid iff the current time is before `expires_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub email: String,
    /// RFC 3339 expiry timestamp.
    pub expires_at: String,
}

impl Session {
    /// Check expiry against the given instant. An unparsable expiry counts
    /// as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match DateTime::parse_from_rfc3339(&self.expires_at) {
            Ok(expires_at) => expires_at.with_timezone(&Utc) <= now,
            Err(_) => true,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session_expiring_at(expires_at: &str) -> Session {
        Session {
            user_id: "1".to_string(),
            email: "admin@jdom.ml".to_string(),
            expires_at: expires_at.to_string(),
        }
    }

    #[test]
    fn test_session_valid_before_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(&(now + Duration::hours(24)).to_rfc3339());
        // One minute short of the 24h window.
        assert!(!session.is_expired_at(now + Duration::hours(23) + Duration::minutes(59)));
    }

    #[test]
    fn test_session_expired_at_and_after_expiry() {
        let now = Utc::now();
        let session = session_expiring_at(&(now + Duration::hours(24)).to_rfc3339());
        assert!(session.is_expired_at(now + Duration::hours(24)));
        assert!(session.is_expired_at(now + Duration::hours(24) + Duration::seconds(1)));
    }

    #[test]
    fn test_unparsable_expiry_counts_as_expired() {
        let session = session_expiring_at("not-a-timestamp");
        assert!(session.is_expired());
    }
}
