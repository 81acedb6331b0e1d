//! Holder for the current authentication session.

use profile_hub::types::Session;
use std::sync::Mutex;
use tokio::sync::broadcast;

/// How many transitions a slow observer may fall behind before it starts
/// missing events.
const EVENT_BUFFER: usize = 16;

/// A session transition pushed to observers.
///
/// Delivery is fire-and-forget: observers only see transitions that happen
/// after they subscribe, and nothing is replayed.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    SignedIn(Session),
    Refreshed(Session),
    SignedOut,
}

/// Single-writer, multi-reader cell for the current session.
///
/// The identity workflows write through the methods below; every other
/// component either reads [`SessionStore::current`] or observes transitions
/// through [`SessionStore::subscribe`].
#[derive(Debug)]
pub struct SessionStore {
    current: Mutex<Option<Session>>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            current: Mutex::new(None),
            events,
        }
    }

    /// The session as of this call, if one is active.
    pub fn current(&self) -> Option<Session> {
        self.cell().clone()
    }

    /// Observe session transitions from this point on. Dropping the receiver
    /// ends the subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Record a fresh sign-in and notify observers.
    pub fn sign_in(&self, session: Session) {
        *self.cell() = Some(session.clone());
        self.publish(SessionEvent::SignedIn(session));
    }

    /// Replace the current session after a token refresh and notify
    /// observers.
    pub fn refresh(&self, session: Session) {
        *self.cell() = Some(session.clone());
        self.publish(SessionEvent::Refreshed(session));
    }

    /// Drop the current session and notify observers.
    pub fn sign_out(&self) {
        *self.cell() = None;
        self.publish(SessionEvent::SignedOut);
    }

    fn publish(&self, event: SessionEvent) {
        // Send only fails when nobody is subscribed, which is fine.
        let _ = self.events.send(event);
    }

    fn cell(&self) -> std::sync::MutexGuard<'_, Option<Session>> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
