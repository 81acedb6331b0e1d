//! The blob store contract for avatar images, and its REST implementation.

use crate::{backend::rest::RestBackend, error::Result};
use async_trait::async_trait;
use bytes::Bytes;
use profile_hub::{
    constants::AVATARS_BUCKET,
    types::{AvatarPath, Session},
};

/// Remote blob store addressed by path within the avatars bucket.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Fetch the blob content stored under `path`.
    async fn download(&self, session: &Session, path: &AvatarPath) -> Result<Bytes>;

    /// Store `content` under `path`. Paths are never overwritten in practice
    /// because every upload generates a fresh one.
    async fn upload(&self, session: &Session, path: &AvatarPath, content: Bytes) -> Result<()>;
}

#[async_trait]
impl BlobStore for RestBackend {
    async fn download(&self, session: &Session, path: &AvatarPath) -> Result<Bytes> {
        let response = self
            .get_storage(&format!("object/{AVATARS_BUCKET}/{path}"))?
            .bearer_auth(&session.tokens.access_token)
            .send()
            .await?;

        Ok(self.check(response).await?.bytes().await?)
    }

    async fn upload(&self, session: &Session, path: &AvatarPath, content: Bytes) -> Result<()> {
        let response = self
            .post_storage(&format!("object/{AVATARS_BUCKET}/{path}"))?
            .bearer_auth(&session.tokens.access_token)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(content)
            .send()
            .await?;

        let _ = self.check(response).await?;
        Ok(())
    }
}
