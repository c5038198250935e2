use super::*;

/// Tests creating a server and reading it back.
///
/// Verifies that every submitted field survives the round trip and that the
/// backend assigns the next vmid, a free address, running status and the
/// logged-in owner.
///
/// Expected: Ok with matching fields, vmid 104, address 192.168.1.103
#[tokio::test]
async fn creates_server_and_reads_it_back() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    let created = gateway.create_server(&new_server("web-2")).await.unwrap();
    let read = gateway.get_server(&created.id).await.unwrap();

    assert_eq!(read, created);
    assert_eq!(read.name, "web-2");
    assert_eq!(read.node, "node02");
    assert_eq!(read.os_template, "debian-11");
    assert_eq!((read.cpu, read.memory, read.storage), (2, 4, 40));
    assert_eq!(read.status, ServerStatus::Running);
    assert_eq!(read.vmid, 104);
    assert_eq!(read.ip_address, "192.168.1.103");
    assert_eq!(read.user_id, ADMIN_ID);
}

/// Tests that placement on an unknown node is refused.
///
/// Expected: Err(Rejected) and the collection unchanged
#[tokio::test]
async fn rejects_unknown_node() {
    let (gateway, _store, log) = logged_in_gateway().await;

    let payload = CreateServerDto {
        node: "node99".to_string(),
        ..new_server("web-2")
    };
    let result = gateway.create_server(&payload).await;

    assert!(matches!(result, Err(AppError::Rejected(_))));
    assert_eq!(log.errors(), vec!["Unknown node 'node99'"]);
    assert_eq!(gateway.get_servers().await.unwrap().len(), 3);
}

/// Tests that creating a server needs an owner.
///
/// Expected: Err(NotLoggedIn) without a session
#[tokio::test]
async fn create_requires_login() {
    let (gateway, _store, _log) = mock_gateway();

    let result = gateway.create_server(&new_server("web-2")).await;

    assert_eq!(result, Err(AppError::Auth(AuthError::NotLoggedIn)));
}

/// Tests that lifecycle actions change the stored status.
///
/// Expected: stopped server running after start, running server stopped after stop
#[tokio::test]
async fn actions_update_stored_status() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    gateway.server_action("2", ServerAction::Start).await.unwrap();
    gateway.server_action("1", ServerAction::Stop).await.unwrap();

    assert_eq!(gateway.get_server("2").await.unwrap().status, ServerStatus::Running);
    assert_eq!(gateway.get_server("1").await.unwrap().status, ServerStatus::Stopped);
}

/// Tests that a failed server can be restarted.
///
/// Expected: failed server running after restart
#[tokio::test]
async fn restart_recovers_failed_server() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    gateway.server_action("3", ServerAction::Restart).await.unwrap();

    assert_eq!(gateway.get_server("3").await.unwrap().status, ServerStatus::Running);
}

/// Tests that a partial update leaves absent fields alone.
///
/// Expected: name and memory changed, cpu and storage untouched
#[tokio::test]
async fn partial_update_keeps_absent_fields() {
    let (gateway, _store, _log) = logged_in_gateway().await;
    let before = gateway.get_server("1").await.unwrap();

    let updated = gateway
        .update_server(
            "1",
            &UpdateServerDto {
                name: Some("Frontend".to_string()),
                memory: Some(8),
                ..UpdateServerDto::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Frontend");
    assert_eq!(updated.memory, 8);
    assert_eq!(updated.cpu, before.cpu);
    assert_eq!(updated.storage, before.storage);
    assert_eq!(updated.status, before.status);
}

/// Tests deleting a server.
///
/// Expected: Ok, then NotFound when reading it again
#[tokio::test]
async fn deletes_server() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    gateway.delete_server("2").await.unwrap();

    assert!(matches!(
        gateway.get_server("2").await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(gateway.get_servers().await.unwrap().len(), 2);
}

/// Tests the number of metric samples per period.
///
/// Expected: 12 for an hour, 24 for a day, 28 for a week, 30 for a month
#[tokio::test]
async fn metrics_have_fixed_sample_counts() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    for (period, samples) in [
        (MetricsPeriod::Hour, 12),
        (MetricsPeriod::Day, 24),
        (MetricsPeriod::Week, 28),
        (MetricsPeriod::Month, 30),
    ] {
        let metrics = gateway.get_server_metrics("1", period).await.unwrap();
        assert_eq!(metrics.server_id, "1");
        assert_eq!(metrics.usage.len(), samples, "{}", period.as_str());
    }
}

/// Tests that a stopped server reports no load.
///
/// Expected: zero cpu and network in every sample
#[tokio::test]
async fn stopped_server_reports_idle_metrics() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    let metrics = gateway
        .get_server_metrics("2", MetricsPeriod::Day)
        .await
        .unwrap();

    assert!(metrics
        .usage
        .iter()
        .all(|sample| sample.cpu == 0.0 && sample.network.inbound == 0.0));
}

/// Tests that timestamps are ordered oldest first.
///
/// Expected: strictly increasing timestamps
#[tokio::test]
async fn metrics_are_chronological() {
    let (gateway, _store, _log) = logged_in_gateway().await;

    let metrics = gateway
        .get_server_metrics("1", MetricsPeriod::Week)
        .await
        .unwrap();

    assert!(metrics
        .usage
        .windows(2)
        .all(|pair| pair[0].timestamp < pair[1].timestamp));
}
