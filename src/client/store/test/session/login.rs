use super::*;

/// Tests login with the valid credential pair.
///
/// Verifies that the session becomes authenticated with the admin identity,
/// persists it and greets the user.
///
/// Expected: authenticated admin, identity persisted, welcome notification
#[tokio::test]
async fn authenticates_with_valid_credentials() {
    let h = mock_session();
    h.session.restore_on_startup().await;

    let user = h.session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();

    let state = h.session.state();
    assert!(state.is_authenticated());
    assert!(state.is_admin());
    assert!(!state.is_loading);
    assert_eq!(h.session.current_identity(), Some(user.clone()));
    assert_eq!(persisted(&h.store), Some(user));
    assert_eq!(h.log.successes(), vec!["Welcome back, Admin!"]);
}

/// Tests login with any other credential pair.
///
/// Expected: still unauthenticated, one error notification, nothing persisted
#[tokio::test]
async fn stays_logged_out_with_invalid_credentials() {
    let h = mock_session();
    h.session.restore_on_startup().await;

    let result = h.session.login(ADMIN_EMAIL, "wrong-password").await;

    assert_eq!(result, Err(AppError::Auth(AuthError::InvalidCredentials)));
    assert!(!h.session.is_authenticated());
    assert!(!h.session.state().is_loading);
    assert_eq!(h.log.errors(), vec!["Invalid credentials"]);
    assert!(h.log.successes().is_empty());
    assert!(!h.store.contains(SESSION_STORAGE_KEY));
}

/// Tests the loading flag around a login.
///
/// Verifies that listeners observe the in-flight state before the result.
///
/// Expected: loading then loaded, identity present only in the last state
#[tokio::test]
async fn reports_loading_while_in_flight() {
    let h = mock_session();
    h.session.restore_on_startup().await;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    h.session
        .on_change(move |state| sink.borrow_mut().push((state.is_loading, state.is_authenticated())));

    h.session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();

    assert_eq!(*seen.borrow(), vec![(true, false), (false, true)]);
}

/// Tests login against the live API.
///
/// Expected: identity from the API, greeting uses the email when no name is set
#[tokio::test]
async fn authenticates_against_live_api() {
    let user = factory::user::UserFactory::new()
        .email("ops@example.com")
        .name("")
        .build();
    let test = TestBuilder::new()
        .with_user(user, "s3cret-pass")
        .build()
        .await
        .unwrap();
    let h = live_session(&test);

    h.session
        .login("ops@example.com", "s3cret-pass")
        .await
        .unwrap();

    assert!(h.session.is_authenticated());
    assert_eq!(h.log.successes(), vec!["Welcome back, ops@example.com!"]);
}
