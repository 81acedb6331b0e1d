//! In-memory doubles for the hosted services, shared by the integration
//! suites.
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use profile_hub::types::{
    AuthTokens, AvatarPath, Email, Profile, ProfileFields, Session, UserId,
};
use profile_hub_client::{
    backend::{BlobStore, IdentityService, ProfileStore},
    error::Result,
    AccountWorkflow, ProfileHubClientError, RootController, SessionStore,
};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};
use tokio::sync::Notify;
use uuid::Uuid;

/// Test double standing in for the identity, tabular, and blob services.
///
/// Failure descriptions and gates are injected per test; counters record how
/// often each service was actually reached.
#[derive(Default)]
pub struct TestBackend {
    profiles: Mutex<HashMap<UserId, ProfileFields>>,
    blobs: Mutex<HashMap<AvatarPath, Bytes>>,
    users: Mutex<HashMap<Email, UserId>>,
    grants: Mutex<HashMap<String, Session>>,

    reject_login: Mutex<Option<String>>,
    reject_upsert: Mutex<Option<String>>,
    reject_fetch: Mutex<Option<String>>,
    hold_fetch: Mutex<Option<Arc<Notify>>>,
    hold_login: Mutex<Option<Arc<Notify>>>,

    pub fetches: AtomicUsize,
    pub login_requests: AtomicUsize,
    pub blob_calls: AtomicUsize,
    pub sign_outs: AtomicUsize,
}

impl TestBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Pre-populate the tabular store with a row for `id`.
    pub fn seed_profile(&self, id: UserId, fields: ProfileFields) {
        let _ = self.profiles.lock().unwrap().insert(id, fields);
    }

    pub fn stored_profile(&self, id: &UserId) -> Option<ProfileFields> {
        self.profiles.lock().unwrap().get(id).cloned()
    }

    pub fn blob_count(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }

    /// Make login-link requests fail with the given service description.
    pub fn reject_login(&self, description: &str) {
        *self.reject_login.lock().unwrap() = Some(description.to_string());
    }

    /// Make upserts fail with the given service description.
    pub fn reject_upsert(&self, description: &str) {
        *self.reject_upsert.lock().unwrap() = Some(description.to_string());
    }

    /// Make profile fetches fail with the given service description.
    pub fn reject_fetch(&self, description: &str) {
        *self.reject_fetch.lock().unwrap() = Some(description.to_string());
    }

    /// Park profile fetches on the returned gate until it is notified.
    pub fn hold_fetch(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.hold_fetch.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Park login-link requests on the returned gate until it is notified.
    pub fn hold_login(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.hold_login.lock().unwrap() = Some(gate.clone());
        gate
    }

    fn user_id_for(&self, email: &Email) -> UserId {
        *self
            .users
            .lock()
            .unwrap()
            .entry(email.clone())
            .or_insert_with(|| UserId::from(Uuid::new_v4()))
    }
}

#[async_trait]
impl IdentityService for TestBackend {
    async fn request_login_link(&self, _email: &Email) -> Result<()> {
        let _ = self.login_requests.fetch_add(1, Ordering::SeqCst);
        // Gates are one-shot: only the next call parks on them.
        let gate = self.hold_login.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(description) = self.reject_login.lock().unwrap().clone() {
            return Err(ProfileHubClientError::ServiceRejected(description));
        }
        Ok(())
    }

    async fn verify_login_link(&self, email: &Email, _token: &str) -> Result<Session> {
        let session = Session {
            user_id: self.user_id_for(email),
            email: email.clone(),
            tokens: AuthTokens {
                access_token: format!("access-{}", Uuid::new_v4()),
                refresh_token: format!("refresh-{}", Uuid::new_v4()),
            },
        };
        let _ = self
            .grants
            .lock()
            .unwrap()
            .insert(session.tokens.refresh_token.clone(), session.clone());
        Ok(session)
    }

    async fn fetch_session(&self, refresh_token: &str) -> Result<Session> {
        self.grants
            .lock()
            .unwrap()
            .get(refresh_token)
            .cloned()
            .ok_or(ProfileHubClientError::Unauthorized)
    }

    async fn sign_out(&self, _tokens: &AuthTokens) -> Result<()> {
        let _ = self.sign_outs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for TestBackend {
    async fn fetch(&self, _session: &Session, id: &UserId) -> Result<Option<ProfileFields>> {
        let _ = self.fetches.fetch_add(1, Ordering::SeqCst);
        let gate = self.hold_fetch.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(description) = self.reject_fetch.lock().unwrap().clone() {
            return Err(ProfileHubClientError::ServiceRejected(description));
        }
        Ok(self.profiles.lock().unwrap().get(id).cloned())
    }

    async fn upsert(&self, _session: &Session, profile: &Profile) -> Result<()> {
        if let Some(description) = self.reject_upsert.lock().unwrap().clone() {
            return Err(ProfileHubClientError::ServiceRejected(description));
        }
        let _ = self
            .profiles
            .lock()
            .unwrap()
            .insert(profile.id, profile.clone().into_fields());
        Ok(())
    }
}

#[async_trait]
impl BlobStore for TestBackend {
    async fn download(&self, _session: &Session, path: &AvatarPath) -> Result<Bytes> {
        let _ = self.blob_calls.fetch_add(1, Ordering::SeqCst);
        self.blobs
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| ProfileHubClientError::ServiceRejected("Object not found".to_string()))
    }

    async fn upload(&self, _session: &Session, path: &AvatarPath, content: Bytes) -> Result<()> {
        let _ = self.blob_calls.fetch_add(1, Ordering::SeqCst);
        let _ = self.blobs.lock().unwrap().insert(path.clone(), content);
        Ok(())
    }
}

/// A session for the given address, with fresh ids and tokens.
pub fn session(email: &str) -> Session {
    Session {
        user_id: UserId::from(Uuid::new_v4()),
        email: email.parse().unwrap(),
        tokens: AuthTokens {
            access_token: format!("access-{}", Uuid::new_v4()),
            refresh_token: format!("refresh-{}", Uuid::new_v4()),
        },
    }
}

/// Mount an account workflow over the test backend, the way the root
/// controller would.
pub fn mount(
    backend: &Arc<TestBackend>,
    sessions: &Arc<SessionStore>,
    session: Session,
) -> Arc<AccountWorkflow> {
    AccountWorkflow::new(
        session,
        backend.clone(),
        backend.clone(),
        backend.clone(),
        sessions.clone(),
    )
}

/// A root controller wired to the test backend.
pub fn controller(backend: &Arc<TestBackend>) -> Arc<RootController> {
    RootController::new(backend.clone(), backend.clone(), backend.clone())
}
