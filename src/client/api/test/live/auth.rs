use super::*;

/// Tests logging in against the live API.
///
/// Expected: Ok with the user, remote session opened for that user
#[tokio::test]
async fn logs_in() {
    let user = factory::user::UserFactory::new()
        .id("5")
        .email("ops@example.com")
        .build();
    let test = TestBuilder::new()
        .with_user(user, "s3cret-pass")
        .build()
        .await
        .unwrap();
    let (gateway, _log) = live_gateway(&test);

    let identity = gateway
        .login("ops@example.com", "s3cret-pass")
        .await
        .unwrap();

    assert_eq!(identity.id, "5");
    assert_eq!(test.session_users(), vec!["5"]);
}

/// Tests that the session opened by login is used by later calls.
///
/// Verifies that the cookie set by `POST /auth/login` is sent back, so the
/// identity check and protected collections succeed on the same gateway.
///
/// Expected: `/auth/me` returns the logged-in user, `/servers` is readable
#[tokio::test]
async fn session_carries_to_later_requests() {
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .with_server(factory::server::create_server())
        .build()
        .await
        .unwrap();
    let (gateway, log) = live_gateway(&test);

    gateway.login(OPERATOR_EMAIL, OPERATOR_PASSWORD).await.unwrap();
    let identity = gateway.me().await.unwrap();
    let servers = gateway.get_servers().await.unwrap();

    assert_eq!(identity.id, OPERATOR_ID);
    assert_eq!(servers.len(), 1);
    assert!(log.errors().is_empty());
}

/// Tests the identity check without a login.
///
/// Expected: 401 "Not authenticated"
#[tokio::test]
async fn identity_requires_session() {
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .build()
        .await
        .unwrap();
    let (gateway, _log) = live_gateway(&test);

    let err = gateway.quiet().me().await.unwrap_err();

    assert_eq!(err.status(), 401);
    assert_eq!(err.to_string(), "Not authenticated");
}

/// Tests that sessions belong to the client that opened them.
///
/// Expected: a second gateway is not authenticated by the first one's login
#[tokio::test]
async fn session_is_not_shared_between_clients() {
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .build()
        .await
        .unwrap();
    let (gateway, _log) = signed_in_gateway(&test).await;
    let (other, _other_log) = live_gateway(&test);

    assert!(gateway.quiet().me().await.is_ok());
    assert_eq!(other.quiet().me().await.unwrap_err().status(), 401);
}

/// Tests remote logout.
///
/// Expected: session closed on the API, later identity check rejected
#[tokio::test]
async fn logout_closes_remote_session() {
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .build()
        .await
        .unwrap();
    let (gateway, _log) = signed_in_gateway(&test).await;

    gateway.logout().await.unwrap();

    assert!(test.session_users().is_empty());
    assert_eq!(gateway.quiet().me().await.unwrap_err().status(), 401);
}

/// Tests a rejected login against the live API.
///
/// Expected: 401 with the API's message notified
#[tokio::test]
async fn surfaces_rejected_login() {
    let test = TestBuilder::new()
        .with_user(factory::user::create_admin(), "right")
        .build()
        .await
        .unwrap();
    let (gateway, log) = live_gateway(&test);

    let err = gateway.login("nobody@example.com", "wrong").await.unwrap_err();

    assert_eq!(err.status(), 401);
    assert_eq!(log.errors(), vec!["Invalid email or password"]);
}

/// Tests that hypervisor settings use the hypervisor-proxy base URL.
///
/// Expected: GET /proxmox/api/settings/proxmox
#[tokio::test]
async fn proxmox_settings_use_proxy_base() {
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .build()
        .await
        .unwrap();
    let (gateway, _log) = signed_in_gateway(&test).await;

    let config = gateway.get_proxmox_config().await.unwrap();

    assert_eq!(
        test.last_request().unwrap().path,
        "/proxmox/api/settings/proxmox"
    );
    assert_eq!(config.username.as_deref(), Some("root@pam"));
    assert!(!config.verify_ssl);
}

/// Tests reading a user by id.
///
/// Expected: the factory user decoded with role admin
#[tokio::test]
async fn reads_user_by_id() {
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .with_user(factory::user::UserFactory::new().id("9").admin(true).build(), "pw")
        .build()
        .await
        .unwrap();
    let (gateway, _log) = signed_in_gateway(&test).await;

    let user = gateway.get_user("9").await.unwrap();

    assert_eq!(user.role, Role::Admin);
}
