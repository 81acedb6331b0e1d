mod common;

use bytes::Bytes;
use common::TestBackend;
use profile_hub_client::{ProfileHubClientError, SessionStore};
use std::sync::{atomic::Ordering, Arc};

#[tokio::test]
async fn empty_selection_fails_without_touching_the_blob_store() {
    let backend = TestBackend::new();
    let sessions = Arc::new(SessionStore::new());
    let session = common::session("alice@example.com");
    let workflow = common::mount(&backend, &sessions, session.clone());

    let error = workflow.upload_avatar("", Bytes::new()).await.unwrap_err();

    assert!(matches!(error, ProfileHubClientError::NoFileSelected));
    assert_eq!(backend.blob_calls.load(Ordering::SeqCst), 0);
    assert!(backend.stored_profile(&session.user_id).is_none());
}

#[tokio::test]
async fn sequential_uploads_get_distinct_paths_and_the_second_one_sticks() {
    let backend = TestBackend::new();
    let sessions = Arc::new(SessionStore::new());
    let session = common::session("alice@example.com");
    let workflow = common::mount(&backend, &sessions, session.clone());

    let first = workflow
        .upload_avatar("me.png", Bytes::from_static(b"first image"))
        .await
        .unwrap();
    let second = workflow
        .upload_avatar("me.png", Bytes::from_static(b"second image"))
        .await
        .unwrap();

    assert_ne!(first, second);
    assert!(second.as_str().ends_with(".png"));

    // The row points at the latest upload; the first blob is orphaned, not
    // deleted.
    let stored = backend.stored_profile(&session.user_id).unwrap();
    assert_eq!(stored.avatar_path, Some(second.clone()));
    assert_eq!(backend.blob_count(), 2);

    assert_eq!(workflow.fields().avatar_path, Some(second));
}

#[tokio::test]
async fn download_returns_the_uploaded_content() {
    let backend = TestBackend::new();
    let sessions = Arc::new(SessionStore::new());
    let workflow = common::mount(&backend, &sessions, common::session("alice@example.com"));

    let _ = workflow
        .upload_avatar("portrait.jpg", Bytes::from_static(b"jpeg bytes"))
        .await
        .unwrap();

    let image = workflow.download_avatar().await.unwrap().unwrap();
    assert_eq!(image.content().as_ref(), b"jpeg bytes");
}

#[tokio::test]
async fn download_without_an_avatar_is_a_no_op() {
    let backend = TestBackend::new();
    let sessions = Arc::new(SessionStore::new());
    let workflow = common::mount(&backend, &sessions, common::session("alice@example.com"));

    assert!(workflow.download_avatar().await.unwrap().is_none());
    assert_eq!(backend.blob_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_download_surfaces_the_service_description() {
    let backend = TestBackend::new();
    let sessions = Arc::new(SessionStore::new());
    let session = common::session("alice@example.com");
    backend.seed_profile(
        session.user_id,
        profile_hub::types::ProfileFields {
            username: None,
            website: None,
            avatar_path: Some("0.123.png".parse().unwrap()),
        },
    );
    let workflow = common::mount(&backend, &sessions, session);
    workflow.load_profile().await.unwrap();

    // The path dangles: the row references a blob that was never uploaded.
    let error = workflow.download_avatar().await.unwrap_err();
    assert_eq!(error.to_string(), "Object not found");
    assert_eq!(
        workflow.fields().avatar_path,
        Some("0.123.png".parse().unwrap())
    );
}
