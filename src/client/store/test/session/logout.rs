use super::*;

/// Tests logging out of an active session.
///
/// Expected: unauthenticated, persistence cleared, farewell notification
#[tokio::test]
async fn clears_session() {
    let h = mock_session();
    h.session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    h.log.clear();

    h.session.logout().await;

    assert!(!h.session.is_authenticated());
    assert!(!h.store.contains(SESSION_STORAGE_KEY));
    assert_eq!(
        h.log.successes(),
        vec!["You have been successfully logged out."]
    );
}

/// Tests logout when the remote invalidation call fails.
///
/// Verifies that the local session is still cleared and that the remote failure
/// is only logged, never shown to the user.
///
/// Expected: unauthenticated, no error notification
#[tokio::test]
async fn clears_session_when_remote_logout_fails() {
    let test = TestBuilder::new()
        .with_user(
            factory::user::UserFactory::new()
                .id("4")
                .email("ops@example.com")
                .build(),
            "pw",
        )
        .with_failure(
            "POST",
            "/api/auth/logout",
            500,
            FailureBody::Message("Session store offline".to_string()),
        )
        .build()
        .await
        .unwrap();
    let h = live_session(&test);
    h.gateway.quiet().login("ops@example.com", "pw").await.unwrap();
    h.session.restore_on_startup().await;
    assert!(h.session.is_authenticated());

    h.session.logout().await;

    assert!(!h.session.is_authenticated());
    assert!(persisted(&h.store).is_none());
    assert!(h.log.errors().is_empty());
    assert_eq!(h.log.successes().len(), 1);
}

/// Tests logout when the API cannot be reached at all.
///
/// Expected: unauthenticated
#[tokio::test]
async fn clears_session_when_api_unreachable() {
    let h = harness(&Config {
        api_mode: ApiMode::Live,
        api_url: "http://127.0.0.1:1/api".to_string(),
        ..Config::default()
    });

    h.session.logout().await;

    assert!(!h.session.is_authenticated());
    assert!(!h.session.state().is_loading);
}
