use super::*;

/// Tests login with the seeded admin credentials.
///
/// Verifies that the one valid credential pair yields the admin identity and
/// opens the simulated remote session.
///
/// Expected: Ok with role admin, `me` returns the same user
#[tokio::test]
async fn logs_in_with_seeded_admin() {
    let (gateway, _store, log) = mock_gateway();

    let user = gateway.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();

    assert_eq!(user.id, ADMIN_ID);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(gateway.me().await.unwrap(), user);
    assert!(log.errors().is_empty());
}

/// Tests login with a wrong password.
///
/// Expected: Err(InvalidCredentials) notified as "Invalid credentials"
#[tokio::test]
async fn rejects_wrong_password() {
    let (gateway, _store, log) = mock_gateway();

    let result = gateway.login(ADMIN_EMAIL, "letmein").await;

    assert_eq!(result, Err(AppError::Auth(AuthError::InvalidCredentials)));
    assert_eq!(log.errors(), vec!["Invalid credentials"]);
}

/// Tests login for an account that has no password set.
///
/// Verifies that seeded users other than the admin cannot log in.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_user_without_credentials() {
    let (gateway, _store, _log) = mock_gateway();

    let result = gateway.login("jane@example.com", ADMIN_PASSWORD).await;

    assert_eq!(result, Err(AppError::Auth(AuthError::InvalidCredentials)));
}

/// Tests that logout closes the simulated remote session.
///
/// Expected: `me` fails with NotLoggedIn after logout
#[tokio::test]
async fn logout_ends_remote_session() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    gateway.logout().await.unwrap();

    assert_eq!(
        gateway.quiet().me().await,
        Err(AppError::Auth(AuthError::NotLoggedIn))
    );
}
