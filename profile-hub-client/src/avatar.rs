//! Upload and download of avatar images.

use crate::{backend::BlobStore, busy::BusyGuard, error::Result, ProfileHubClientError};
use bytes::Bytes;
use profile_hub::types::{AvatarImage, AvatarPath, Session};
use std::sync::{atomic::AtomicBool, atomic::Ordering, Arc};
use tracing::warn;

/// Moves avatar content between the blob store and the local surface.
pub struct AvatarStore {
    blobs: Arc<dyn BlobStore>,
    uploading: AtomicBool,
}

impl AvatarStore {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            blobs,
            uploading: AtomicBool::new(false),
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading.load(Ordering::Acquire)
    }

    /// Fetch the blob at `path` and wrap it for local display.
    ///
    /// Failures are logged and returned; the caller keeps whatever image it
    /// was already showing.
    pub async fn download(&self, session: &Session, path: &AvatarPath) -> Result<AvatarImage> {
        match self.blobs.download(session, path).await {
            Ok(content) => Ok(AvatarImage::new(path.clone(), content)),
            Err(error) => {
                warn!(%path, %error, "Error downloading image");
                Err(error)
            }
        }
    }

    /// Upload `content` under a freshly generated path and return the path.
    ///
    /// An empty selection fails before any network call. The generated name
    /// keeps the original file's extension; earlier uploads stay in the
    /// bucket under their old paths.
    pub async fn upload(
        &self,
        session: &Session,
        file_name: &str,
        content: Bytes,
    ) -> Result<AvatarPath> {
        let _guard = BusyGuard::acquire(&self.uploading)?;

        if file_name.is_empty() || content.is_empty() {
            return Err(ProfileHubClientError::NoFileSelected);
        }

        let extension = file_name.rsplit('.').next().unwrap_or(file_name);
        let path = AvatarPath::generate(&mut rand::thread_rng(), extension);

        self.blobs.upload(session, &path, content).await?;
        Ok(path)
    }
}
