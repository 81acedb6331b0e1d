//! Dispatch between the signed-out and signed-in surfaces.

use crate::{
    account::AccountWorkflow,
    auth::AuthWorkflow,
    backend::{BlobStore, IdentityService, ProfileStore},
    error::Result,
    session::SessionStore,
};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::{sync::broadcast::error::RecvError, task::JoinHandle};

/// What the application should currently present.
#[derive(Clone)]
pub enum Screen {
    /// No session: offer the magic-link sign-in flow.
    SignIn,
    /// Active session: the account workflow mounted for that user.
    Account(Arc<AccountWorkflow>),
}

/// Observes the session store and keeps exactly one surface mounted.
///
/// Pure dispatch: a session's arrival mounts an account workflow keyed by
/// its user id (triggering the initial profile load), a user change swaps in
/// a fresh workflow and discards all edit state, and sign-out returns to the
/// sign-in surface.
pub struct RootController {
    sessions: Arc<SessionStore>,
    identity: Arc<dyn IdentityService>,
    profiles: Arc<dyn ProfileStore>,
    blobs: Arc<dyn BlobStore>,
    auth: Arc<AuthWorkflow>,
    screen: Mutex<Screen>,
}

impl RootController {
    pub fn new(
        identity: Arc<dyn IdentityService>,
        profiles: Arc<dyn ProfileStore>,
        blobs: Arc<dyn BlobStore>,
    ) -> Arc<Self> {
        let sessions = Arc::new(SessionStore::new());
        let auth = AuthWorkflow::new(identity.clone(), sessions.clone());
        Arc::new(Self {
            sessions,
            identity,
            profiles,
            blobs,
            auth,
            screen: Mutex::new(Screen::SignIn),
        })
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    pub fn auth(&self) -> &Arc<AuthWorkflow> {
        &self.auth
    }

    pub fn screen(&self) -> Screen {
        self.lock_screen().clone()
    }

    /// Restore a session from a stored refresh token, as a browser would on
    /// page load.
    pub async fn restore_session(&self, refresh_token: &str) -> Result<()> {
        let session = self.identity.fetch_session(refresh_token).await?;
        self.sessions.sign_in(session);
        self.resync();
        Ok(())
    }

    /// Mirror the session store into the active screen until the controller
    /// is dropped.
    pub fn spawn(self: &Arc<Self>) -> JoinHandle<()> {
        let controller = self.clone();
        let mut events = self.sessions.subscribe();
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    // The store is authoritative; events only say it moved.
                    Ok(_) | Err(RecvError::Lagged(_)) => controller.resync(),
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }

    /// Recompute the screen from the session store's current state.
    pub fn resync(&self) {
        let session = self.sessions.current();
        let mut screen = self.lock_screen();

        match session {
            Some(session) => {
                if let Screen::Account(mounted) = &*screen {
                    if mounted.session().user_id == session.user_id {
                        return;
                    }
                    mounted.detach();
                }

                let workflow = AccountWorkflow::new(
                    session,
                    self.profiles.clone(),
                    self.blobs.clone(),
                    self.identity.clone(),
                    self.sessions.clone(),
                );
                *screen = Screen::Account(workflow.clone());
                drop(screen);

                // Mount kicks off the initial load; failures stay silent and
                // a teardown before the response discards it.
                let _ = tokio::spawn(async move { workflow.load_profile().await });
            }
            None => {
                if let Screen::Account(mounted) = &*screen {
                    mounted.detach();
                }
                *screen = Screen::SignIn;
            }
        }
    }

    fn lock_screen(&self) -> MutexGuard<'_, Screen> {
        self.screen.lock().unwrap_or_else(|e| e.into_inner())
    }
}
