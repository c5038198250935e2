use super::*;

/// Tests re-reading the identity after it changed elsewhere.
///
/// Expected: the new name replaces the old one and is persisted
#[tokio::test]
async fn picks_up_changed_identity() {
    let h = mock_session();
    h.session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    h.gateway
        .update_user(
            ADMIN_ID,
            &UpdateUserDto {
                name: Some("Root".to_string()),
                ..UpdateUserDto::default()
            },
        )
        .await
        .unwrap();

    let user = h.session.refresh().await.unwrap();

    assert_eq!(user.name, "Root");
    assert_eq!(h.session.current_identity().map(|u| u.name), Some("Root".to_string()));
    assert_eq!(persisted(&h.store).map(|u| u.name), Some("Root".to_string()));
}

/// Tests a failed identity check against the live API.
///
/// Expected: Err and the session destroyed
#[tokio::test]
async fn failed_check_ends_session() {
    let test = TestBuilder::new()
        .with_user(
            factory::user::UserFactory::new()
                .id("21")
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
    h.gateway.quiet().logout().await.unwrap();

    let result = h.session.refresh().await;

    assert_eq!(result.unwrap_err().status(), 401);
    assert!(!h.session.is_authenticated());
    assert!(persisted(&h.store).is_none());
}

/// Tests refreshing without a session.
///
/// Expected: Err(NotLoggedIn)
#[tokio::test]
async fn requires_identity_in_mock_mode() {
    let h = mock_session();
    h.session.restore_on_startup().await;

    let result = h.session.refresh().await;

    assert_eq!(result, Err(AppError::Auth(AuthError::NotLoggedIn)));
}

/// Tests an identity check right after a live login.
///
/// Verifies that the session opened by the login is the one checked, so the
/// user stays logged in.
///
/// Expected: Ok with the same user, still authenticated
#[tokio::test]
async fn keeps_live_session_opened_by_login() {
    let test = TestBuilder::new()
        .with_user(
            factory::user::UserFactory::new()
                .id("33")
                .email("ops@example.com")
                .build(),
            "pw",
        )
        .build()
        .await
        .unwrap();
    let h = live_session(&test);
    h.session.login("ops@example.com", "pw").await.unwrap();

    let user = h.session.refresh().await.unwrap();

    assert_eq!(user.id, "33");
    assert!(h.session.is_authenticated());
    assert!(h.log.errors().is_empty());
}
