use super::*;

/// Tests restoring a persisted identity without a backend.
///
/// Verifies that the identity is kept when the simulated dataset still holds it
/// as its session user.
///
/// Expected: the persisted identity, loading finished
#[tokio::test]
async fn restores_persisted_identity_in_mock_mode() {
    let h = mock_session();
    let user = h.gateway.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    StoredSession::new(Rc::new(h.store.clone()))
        .save(&user)
        .unwrap();
    assert!(h.session.state().is_loading);

    h.session.restore_on_startup().await;

    let state = h.session.state();
    assert!(!state.is_loading);
    assert_eq!(state.identity, Some(user));
}

/// Tests a persisted identity the simulated dataset has no session for.
///
/// Expected: no identity, persistence cleared, no notifications
#[tokio::test]
async fn drops_identity_without_simulated_session() {
    let h = mock_session();
    let user = h.gateway.get_user(ADMIN_ID).await.unwrap();
    StoredSession::new(Rc::new(h.store.clone()))
        .save(&user)
        .unwrap();

    h.session.restore_on_startup().await;

    assert!(!h.session.is_authenticated());
    assert!(persisted(&h.store).is_none());
    assert!(h.log.all().is_empty());
}

/// Tests restoring after the simulated dataset was reseeded.
///
/// Verifies that a corrupt dataset, which is replaced by fresh seed data
/// without a session, also ends the persisted session.
///
/// Expected: unauthenticated, so later writes are not attempted as a ghost user
#[tokio::test]
async fn drops_identity_after_dataset_reseed() {
    let admin = mock_session().gateway.get_user(ADMIN_ID).await.unwrap();
    let store = MemoryStore::new();
    store.set(MOCK_DATABASE_KEY, "{broken").unwrap();
    StoredSession::new(Rc::new(store.clone()))
        .save(&admin)
        .unwrap();
    let h = harness_on(&Config::default(), store);

    h.session.restore_on_startup().await;

    assert!(!h.session.is_authenticated());
    assert!(!h.store.contains(SESSION_STORAGE_KEY));
}

/// Tests restoring from undecodable persisted data.
///
/// Expected: no identity and the bad entry removed
#[tokio::test]
async fn clears_corrupt_identity() {
    let h = mock_session();
    h.store.set(SESSION_STORAGE_KEY, "{\"id\":").unwrap();

    h.session.restore_on_startup().await;

    assert!(!h.session.is_authenticated());
    assert!(!h.session.state().is_loading);
    assert!(!h.store.contains(SESSION_STORAGE_KEY));
}

/// Tests startup with nothing persisted.
///
/// Expected: no identity, loading finished, no notifications
#[tokio::test]
async fn finishes_loading_without_identity() {
    let h = mock_session();

    h.session.restore_on_startup().await;

    assert_eq!(h.session.current_identity(), None);
    assert!(!h.session.state().is_loading);
    assert!(h.log.all().is_empty());
}

/// Tests restoring a live session from the API.
///
/// Expected: identity from `/auth/me`, persisted
#[tokio::test]
async fn restores_remote_session_in_live_mode() {
    let test = TestBuilder::new()
        .with_user(
            factory::user::UserFactory::new()
                .id("12")
                .email("ops@example.com")
                .build(),
            "pw",
        )
        .build()
        .await
        .unwrap();
    let h = live_session(&test);
    h.gateway.quiet().login("ops@example.com", "pw").await.unwrap();

    h.session.restore_on_startup().await;

    assert_eq!(h.session.state().user_id(), Some("12"));
    assert_eq!(persisted(&h.store).map(|u| u.id), Some("12".to_string()));
}

/// Tests live startup without a remote session.
///
/// Verifies that a stale persisted identity is dropped and that the failed
/// identity check is not shown to the user.
///
/// Expected: no identity, persistence cleared, no notifications
#[tokio::test]
async fn drops_stale_identity_in_live_mode() {
    let test = TestBuilder::new().build().await.unwrap();
    let h = live_session(&test);
    let stale = mock_session().gateway.get_user(ADMIN_ID).await.unwrap();
    StoredSession::new(Rc::new(h.store.clone()))
        .save(&stale)
        .unwrap();

    h.session.restore_on_startup().await;

    assert!(!h.session.is_authenticated());
    assert!(persisted(&h.store).is_none());
    assert!(h.log.all().is_empty());
}
