//! Session types issued by the identity service.

use crate::ProfileHubError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use uuid::Uuid;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Unique ID for a user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ProfileHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Email address used as the human-memorable identifier for a user.
///
/// Format enforcement belongs to the identity service; parsing only rejects
/// input that cannot possibly be an address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = ProfileHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.contains('@') {
            return Err(ProfileHubError::InvalidEmail);
        }
        Ok(Self(s.to_string()))
    }
}

/// Bearer tokens issued by the identity service for one session.
#[derive(Debug, Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// A single authenticated session, as reported by the identity service.
///
/// Owned by the session store; every other component treats it as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: Email,
    pub tokens: AuthTokens,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rejects_empty_and_address_free_input() {
        assert!(Email::from_str("").is_err());
        assert!(Email::from_str("   ").is_err());
        assert!(Email::from_str("not-an-address").is_err());
        assert!(Email::from_str("someone@example.com").is_ok());
    }

    #[test]
    fn user_id_round_trips_through_display() {
        let id = UserId::from(Uuid::new_v4());
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
