use super::*;

/// Tests updating the current user's profile.
///
/// Expected: identity replaced and persisted, success notification
#[tokio::test]
async fn replaces_identity() {
    let h = mock_session();
    h.session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    h.log.clear();

    let user = h
        .session
        .update_profile(&UpdateUserDto {
            name: Some("Operations".to_string()),
            email: Some("ops@vps-panel.local".to_string()),
            ..UpdateUserDto::default()
        })
        .await
        .unwrap();

    assert_eq!(user.email, "ops@vps-panel.local");
    assert_eq!(h.session.current_identity(), Some(user.clone()));
    assert_eq!(persisted(&h.store), Some(user));
    assert_eq!(h.log.successes(), vec!["Profile updated successfully"]);
}

/// Tests a profile update without a session.
///
/// Expected: Err(NotLoggedIn), notified once
#[tokio::test]
async fn requires_identity() {
    let h = mock_session();
    h.session.restore_on_startup().await;

    let result = h.session.update_profile(&UpdateUserDto::default()).await;

    assert_eq!(result, Err(AppError::Auth(AuthError::NotLoggedIn)));
    assert_eq!(h.log.errors(), vec!["You are not logged in"]);
}

/// Tests a password change with the wrong current password.
///
/// Expected: Err(Rejected) and the identity unchanged
#[tokio::test]
async fn keeps_identity_when_rejected() {
    let h = mock_session();
    let before = h.session.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();

    let result = h
        .session
        .update_profile(&UpdateUserDto {
            name: Some("Changed".to_string()),
            current_password: Some("not-it".to_string()),
            new_password: Some("another-password".to_string()),
            ..UpdateUserDto::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::Rejected(_))));
    assert_eq!(h.session.current_identity(), Some(before));
}
