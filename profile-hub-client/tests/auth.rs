mod common;

use common::TestBackend;
use profile_hub::types::Email;
use profile_hub_client::{
    session::SessionEvent, AuthWorkflow, ProfileHubClientError, SessionStore,
};
use std::sync::{atomic::Ordering, Arc};

fn email(address: &str) -> Email {
    address.parse().unwrap()
}

#[tokio::test]
async fn rejected_login_surfaces_the_service_description_verbatim() {
    let backend = TestBackend::new();
    backend.reject_login("Unable to validate email address: invalid format");
    let sessions = Arc::new(SessionStore::new());
    let auth = AuthWorkflow::new(backend.clone(), sessions);

    let error = auth
        .request_login_link(&email("bad@example"))
        .await
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Unable to validate email address: invalid format"
    );
}

#[tokio::test]
async fn login_requests_do_not_overlap() {
    let backend = TestBackend::new();
    let sessions = Arc::new(SessionStore::new());
    let auth = AuthWorkflow::new(backend.clone(), sessions);

    let gate = backend.hold_login();
    let in_flight = {
        let auth = auth.clone();
        tokio::spawn(async move { auth.request_login_link(&email("alice@example.com")).await })
    };
    while backend.login_requests.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }

    assert!(auth.is_busy());
    assert!(matches!(
        auth.request_login_link(&email("alice@example.com")).await,
        Err(ProfileHubClientError::OperationInFlight)
    ));

    gate.notify_one();
    in_flight.await.unwrap().unwrap();
    assert!(!auth.is_busy());

    // Only the first submission reached the service.
    assert_eq!(backend.login_requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn completing_a_login_signs_the_user_in() {
    let backend = TestBackend::new();
    let sessions = Arc::new(SessionStore::new());
    let auth = AuthWorkflow::new(backend.clone(), sessions.clone());

    let mut events = sessions.subscribe();
    auth.complete_login(&email("alice@example.com"), "123456")
        .await
        .unwrap();

    let current = sessions.current().unwrap();
    assert_eq!(current.email, email("alice@example.com"));
    assert!(matches!(events.try_recv(), Ok(SessionEvent::SignedIn(_))));
}
