use super::*;

fn new_user(email: &str) -> CreateUserDto {
    CreateUserDto {
        email: email.to_string(),
        name: "Ops".to_string(),
        role: Role::User,
        password: "hunter2hunter2".to_string(),
    }
}

/// Tests that a created user can log in with their password.
///
/// Expected: Ok login returning the created user
#[tokio::test]
async fn created_user_can_log_in() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    let created = gateway.create_user(&new_user("ops@example.com")).await.unwrap();
    let logged_in = gateway
        .login("ops@example.com", "hunter2hunter2")
        .await
        .unwrap();

    assert_eq!(logged_in, created);
    assert_eq!(logged_in.role, Role::User);
}

/// Tests that email addresses are unique.
///
/// Expected: Err(Rejected) for an address differing only in case
#[tokio::test]
async fn rejects_duplicate_email() {
    let (gateway, _store, log) = logged_in_gateway().await;

    let result = gateway.create_user(&new_user("Jane@Example.com")).await;

    assert!(matches!(result, Err(AppError::Rejected(_))));
    assert_eq!(log.errors(), vec!["A user with this email already exists"]);
}

/// Tests that a password change needs the current password.
///
/// Expected: Err(Rejected) without it and with a wrong one
#[tokio::test]
async fn password_change_requires_current_password() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    let without = UpdateUserDto {
        new_password: Some("brand-new-pass".to_string()),
        ..UpdateUserDto::default()
    };
    let wrong = UpdateUserDto {
        current_password: Some("nope".to_string()),
        ..without.clone()
    };

    assert!(matches!(
        gateway.update_user(ADMIN_ID, &without).await,
        Err(AppError::Rejected(_))
    ));
    assert!(matches!(
        gateway.update_user(ADMIN_ID, &wrong).await,
        Err(AppError::Rejected(_))
    ));
}

/// Tests a successful password change.
///
/// Expected: old password refused, new one accepted
#[tokio::test]
async fn changes_password() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    gateway
        .update_user(
            ADMIN_ID,
            &UpdateUserDto {
                current_password: Some(ADMIN_PASSWORD.to_string()),
                new_password: Some("brand-new-pass".to_string()),
                ..UpdateUserDto::default()
            },
        )
        .await
        .unwrap();

    assert!(gateway.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.is_err());
    assert!(gateway.login(ADMIN_EMAIL, "brand-new-pass").await.is_ok());
}

/// Tests deleting the logged-in user.
///
/// Expected: the simulated remote session ends with the account
#[tokio::test]
async fn deleting_session_user_ends_session() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    gateway.delete_user(ADMIN_ID).await.unwrap();

    assert!(gateway.quiet().me().await.is_err());
    assert!(matches!(
        gateway.get_user(ADMIN_ID).await,
        Err(AppError::NotFound(_))
    ));
}
