//! The tabular store contract for profile rows, and its REST implementation.

use crate::{backend::rest::RestBackend, error::Result};
use async_trait::async_trait;
use profile_hub::{
    constants::{headers, PROFILES_TABLE},
    types::{Profile, ProfileFields, Session, UserId},
};

/// Remote tabular store holding one profile row per user.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the editable columns of the row keyed by `id`. A user who has
    /// never saved has no row, reported as `None`.
    async fn fetch(&self, session: &Session, id: &UserId) -> Result<Option<ProfileFields>>;

    /// Insert-or-replace the row keyed by `profile.id`.
    async fn upsert(&self, session: &Session, profile: &Profile) -> Result<()>;
}

#[async_trait]
impl ProfileStore for RestBackend {
    async fn fetch(&self, session: &Session, id: &UserId) -> Result<Option<ProfileFields>> {
        let response = self
            .get_rest(PROFILES_TABLE)?
            .bearer_auth(&session.tokens.access_token)
            .query(&[
                ("select", "username,website,avatar_path".to_string()),
                ("id", format!("eq.{id}")),
            ])
            .send()
            .await?;

        let mut rows: Vec<ProfileFields> = self.check(response).await?.json().await?;
        Ok(rows.pop())
    }

    async fn upsert(&self, session: &Session, profile: &Profile) -> Result<()> {
        let response = self
            .post_rest(PROFILES_TABLE)?
            .bearer_auth(&session.tokens.access_token)
            .header(headers::PREFER, headers::MERGE_DUPLICATES)
            .json(profile)
            .send()
            .await?;

        let _ = self.check(response).await?;
        Ok(())
    }
}
