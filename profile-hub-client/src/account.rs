//! Account workflow for one signed-in session.

use crate::{
    avatar::AvatarStore,
    backend::{BlobStore, IdentityService, ProfileStore},
    busy::BusyGuard,
    error::Result,
    session::SessionStore,
};
use bytes::Bytes;
use profile_hub::types::{AvatarImage, AvatarPath, Profile, ProfileFields, Session};
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex, MutexGuard,
};
use strum::Display;
use time::OffsetDateTime;
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;

/// Lifecycle of one mounted account workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AccountState {
    Idle,
    Loading,
    Loaded,
    Saving,
}

/// Loads and edits the profile row belonging to one session's user.
///
/// An instance exists for the duration of one signed-in session; the root
/// controller builds a fresh one whenever the user id changes, so edit state
/// never leaks between users. A busy flag rejects overlapping operations at
/// this level only; a second client editing the same row still wins or
/// loses by arrival order.
pub struct AccountWorkflow {
    session: Session,
    profiles: Arc<dyn ProfileStore>,
    identity: Arc<dyn IdentityService>,
    avatars: AvatarStore,
    sessions: Arc<SessionStore>,
    state: Mutex<AccountState>,
    fields: Mutex<ProfileFields>,
    generation: AtomicU64,
    busy: AtomicBool,
}

impl AccountWorkflow {
    pub fn new(
        session: Session,
        profiles: Arc<dyn ProfileStore>,
        blobs: Arc<dyn BlobStore>,
        identity: Arc<dyn IdentityService>,
        sessions: Arc<SessionStore>,
    ) -> Arc<Self> {
        Arc::new(Self {
            session,
            profiles,
            identity,
            avatars: AvatarStore::new(blobs),
            sessions,
            state: Mutex::new(AccountState::Idle),
            fields: Mutex::new(ProfileFields::default()),
            generation: AtomicU64::new(0),
            busy: AtomicBool::new(false),
        })
    }

    /// The session this workflow was mounted for.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> AccountState {
        *self.lock_state()
    }

    /// Snapshot of the editable fields.
    pub fn fields(&self) -> ProfileFields {
        self.lock_fields().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Stop applying results from operations still in flight. Called on
    /// teardown; after this, a late-arriving load is discarded instead of
    /// overwriting a newer mount's state.
    pub fn detach(&self) {
        let _ = self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Fetch this user's profile row and populate the editable fields.
    ///
    /// A missing row or a backend failure leaves the fields unset; failures
    /// are logged rather than surfaced, so the caller sees an empty profile
    /// either way.
    pub async fn load_profile(&self) -> Result<()> {
        let _guard = BusyGuard::acquire(&self.busy)?;
        let generation = self.generation.load(Ordering::Acquire);
        self.set_state(AccountState::Loading);
        let request_id = Uuid::new_v4();

        let fetched = async {
            self.profiles
                .fetch(&self.session, &self.session.user_id)
                .await
        }
        .instrument(info_span!("load_profile", request_id = %request_id))
        .await;

        if self.generation.load(Ordering::Acquire) != generation {
            debug!("Discarding stale profile load");
            return Ok(());
        }

        match fetched {
            Ok(Some(fields)) => *self.lock_fields() = fields,
            Ok(None) => warn!("No profile row stored for this user yet"),
            Err(error) => warn!(%error, "Profile load failed"),
        }

        self.set_state(AccountState::Loaded);
        Ok(())
    }

    /// Upsert the edited fields for this user, stamping `updated_at`.
    ///
    /// On success the fields become the local state; on failure the service's
    /// description is returned for the blocking channel and local state is
    /// untouched.
    pub async fn update_profile(&self, fields: ProfileFields) -> Result<()> {
        let _guard = BusyGuard::acquire(&self.busy)?;
        self.set_state(AccountState::Saving);
        let request_id = Uuid::new_v4();

        let profile = Profile::new(self.session.user_id, fields.clone(), OffsetDateTime::now_utc());
        let result = async { self.profiles.upsert(&self.session, &profile).await }
            .instrument(info_span!("update_profile", request_id = %request_id))
            .await;

        self.set_state(AccountState::Loaded);
        match result {
            Ok(()) => {
                *self.lock_fields() = fields;
                Ok(())
            }
            Err(error) => Err(error),
        }
    }

    /// Fetch the avatar referenced by the current fields, if any.
    pub async fn download_avatar(&self) -> Result<Option<AvatarImage>> {
        let path = self.lock_fields().avatar_path.clone();
        match path {
            None => Ok(None),
            Some(path) => self
                .avatars
                .download(&self.session, &path)
                .await
                .map(Some),
        }
    }

    /// Upload new avatar content, then persist its path on the profile row.
    /// The previous blob stays in the bucket under its old path.
    pub async fn upload_avatar(&self, file_name: &str, content: Bytes) -> Result<AvatarPath> {
        let path = self
            .avatars
            .upload(&self.session, file_name, content)
            .await?;

        let mut fields = self.fields();
        fields.avatar_path = Some(path.clone());
        self.update_profile(fields).await?;
        Ok(path)
    }

    /// End this session. The revocation call is best-effort; the local
    /// session is cleared regardless, and the resulting transition makes the
    /// root controller drop this workflow.
    pub async fn sign_out(&self) -> Result<()> {
        self.detach();

        if let Err(error) = self.identity.sign_out(&self.session.tokens).await {
            warn!(%error, "Remote sign-out failed");
        }

        self.sessions.sign_out();
        Ok(())
    }

    fn set_state(&self, state: AccountState) {
        *self.lock_state() = state;
    }

    fn lock_state(&self) -> MutexGuard<'_, AccountState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_fields(&self) -> MutexGuard<'_, ProfileFields> {
        self.fields.lock().unwrap_or_else(|e| e.into_inner())
    }
}
