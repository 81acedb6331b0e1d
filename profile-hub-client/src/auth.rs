//! Magic-link sign-in workflow.

use crate::{backend::IdentityService, busy::BusyGuard, error::Result, session::SessionStore};
use profile_hub::types::Email;
use std::sync::{atomic::AtomicBool, atomic::Ordering, Arc};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Requests one-time login links and completes them against the identity
/// service.
///
/// A busy flag rejects re-submission while one request is outstanding; there
/// is no cancellation, retry, or timeout.
pub struct AuthWorkflow {
    identity: Arc<dyn IdentityService>,
    sessions: Arc<SessionStore>,
    busy: AtomicBool,
}

impl AuthWorkflow {
    pub fn new(identity: Arc<dyn IdentityService>, sessions: Arc<SessionStore>) -> Arc<Self> {
        Arc::new(Self {
            identity,
            sessions,
            busy: AtomicBool::new(false),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Ask the identity service to email a one-time login link.
    ///
    /// Success means the link was sent, not that the user is signed in; the
    /// session appears once the link is completed.
    pub async fn request_login_link(&self, email: &Email) -> Result<()> {
        let _guard = BusyGuard::acquire(&self.busy)?;
        let request_id = Uuid::new_v4();

        async {
            info!("Requesting login link");
            self.identity.request_login_link(email).await
        }
        .instrument(info_span!("request_login_link", request_id = %request_id))
        .await
    }

    /// Exchange the token from an emailed link for a session and push the
    /// sign-in transition to observers.
    pub async fn complete_login(&self, email: &Email, token: &str) -> Result<()> {
        let _guard = BusyGuard::acquire(&self.busy)?;
        let request_id = Uuid::new_v4();

        let session = async {
            info!("Completing login link");
            self.identity.verify_login_link(email, token).await
        }
        .instrument(info_span!("complete_login", request_id = %request_id))
        .await?;

        self.sessions.sign_in(session);
        Ok(())
    }
}
