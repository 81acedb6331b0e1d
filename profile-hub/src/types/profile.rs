//! The profile row kept for each user.

use crate::types::{avatar::AvatarPath, session::UserId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One profile row, keyed by the owning user's id.
///
/// Rows are created implicitly on first write: the tabular store upserts by
/// id, so a user who has never saved simply has no row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: UserId,
    pub username: Option<String>,
    pub website: Option<String>,
    pub avatar_path: Option<AvatarPath>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Profile {
    pub fn new(id: UserId, fields: ProfileFields, updated_at: OffsetDateTime) -> Self {
        Self {
            id,
            username: fields.username,
            website: fields.website,
            avatar_path: fields.avatar_path,
            updated_at,
        }
    }

    pub fn into_fields(self) -> ProfileFields {
        ProfileFields {
            username: self.username,
            website: self.website,
            avatar_path: self.avatar_path,
        }
    }
}

/// The editable subset of a profile, as held by the account workflow while a
/// user is signed in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileFields {
    pub username: Option<String>,
    pub website: Option<String>,
    pub avatar_path: Option<AvatarPath>,
}
