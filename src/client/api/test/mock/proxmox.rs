use super::*;

fn token_config() -> ProxmoxConfigDto {
    ProxmoxConfigDto {
        api_url: "https://pve.example.com:8006/api2/json".to_string(),
        username: None,
        password: None,
        token: Some("2c6f-secret".to_string()),
        token_name: Some("panel".to_string()),
        verify_ssl: true,
        node_list: Vec::new(),
    }
}

/// Tests that saving never drops the stored node list or echoes secrets.
///
/// Expected: node list kept, password absent from the response
#[tokio::test]
async fn save_keeps_node_list() {
    let (gateway, _store, _log) = logged_in_gateway().await;
    let before = gateway.get_proxmox_config().await.unwrap();

    let saved = gateway
        .save_proxmox_config(&ProxmoxConfigDto {
            password: Some("pve-root-pass".to_string()),
            ..before.clone()
        })
        .await
        .unwrap();

    assert_eq!(saved.node_list, before.node_list);
    assert_eq!(saved.password, None);
    assert_eq!(gateway.get_proxmox_config().await.unwrap(), saved);
}

/// Tests that switching to token auth drops the username.
///
/// Expected: token kept, username cleared
#[tokio::test]
async fn token_auth_replaces_username() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    let saved = gateway.save_proxmox_config(&token_config()).await.unwrap();

    assert_eq!(saved.username, None);
    assert_eq!(saved.token_name.as_deref(), Some("panel"));
}

/// Tests the simulated connection check.
///
/// Expected: success with token auth, failure without credentials or with a bad URL
#[tokio::test]
async fn connection_test_checks_url_and_credentials() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    let ok = gateway.test_proxmox_connection(&token_config()).await.unwrap();
    let no_credentials = gateway
        .test_proxmox_connection(&ProxmoxConfigDto {
            token: None,
            ..token_config()
        })
        .await
        .unwrap();
    let bad_url = gateway
        .test_proxmox_connection(&ProxmoxConfigDto {
            api_url: "not a url".to_string(),
            ..token_config()
        })
        .await
        .unwrap();

    assert!(ok.success);
    assert!(ok.message.contains("pve.example.com"));
    assert!(!no_credentials.success);
    assert!(!bad_url.success);
}

/// Tests node synchronisation.
///
/// Verifies that the whole node collection is replaced with one online node per
/// configured name and that usage reflects the servers placed on each node.
///
/// Expected: three online nodes, node01 using the cpu of its two servers
#[tokio::test]
async fn sync_replaces_node_collection() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    let synced = gateway.sync_proxmox_nodes().await.unwrap();

    assert_eq!(synced.len(), 3);
    assert!(synced.iter().all(|n| n.status == NodeStatus::Online));
    assert_eq!(synced[0].name, "node01");
    assert_eq!(synced[0].cpu_used, 4.0);
    assert_eq!(gateway.get_nodes().await.unwrap(), synced);
}
