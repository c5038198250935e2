use super::*;

/// Tests listing servers from the live API.
///
/// Expected: both seeded servers decoded with their status
#[tokio::test]
async fn lists_servers() {
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .with_server(factory::server::ServerFactory::new().name("alpha").build())
        .with_server(
            factory::server::ServerFactory::new()
                .name("beta")
                .status("stopped")
                .build(),
        )
        .build()
        .await
        .unwrap();
    let (gateway, _log) = signed_in_gateway(&test).await;

    let servers = gateway.get_servers().await.unwrap();

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].name, "alpha");
    assert_eq!(servers[1].status, ServerStatus::Stopped);
}

/// Tests the request shape of server creation.
///
/// Verifies that the payload is sent as camelCase JSON with the JSON content
/// type and that the plan id is omitted for a custom size.
///
/// Expected: POST /api/servers with osTemplate set and no planId
#[tokio::test]
async fn create_sends_json_payload() {
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .build()
        .await
        .unwrap();
    let (gateway, _log) = signed_in_gateway(&test).await;

    let created = gateway.create_server(&new_server("web-2")).await.unwrap();

    let request = test.last_request().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/servers");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));

    let body = request.body.unwrap();
    assert_eq!(body["osTemplate"], "debian-11");
    assert!(body.get("planId").is_none());

    assert_eq!(created.name, "web-2");
    assert_eq!(created.user_id, OPERATOR_ID);
}

/// Tests that a partial update only sends the fields it sets.
///
/// Expected: PUT body containing just the name
#[tokio::test]
async fn update_sends_only_given_fields() {
    let server = factory::server::create_server();
    let id = server["id"].as_str().unwrap().to_string();
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .with_server(server)
        .build()
        .await
        .unwrap();
    let (gateway, _log) = signed_in_gateway(&test).await;

    gateway
        .update_server(
            &id,
            &UpdateServerDto {
                name: Some("renamed".to_string()),
                ..UpdateServerDto::default()
            },
        )
        .await
        .unwrap();

    let request = test.last_request().unwrap();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.body, Some(json!({ "name": "renamed" })));
}

/// Tests the action endpoint.
///
/// Verifies that an action posts to its own path and that its empty response
/// is accepted.
///
/// Expected: POST /api/servers/:id/restart, server running afterwards
#[tokio::test]
async fn posts_action_to_action_path() {
    let server = factory::server::ServerFactory::new().status("stopped").build();
    let id = server["id"].as_str().unwrap().to_string();
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .with_server(server)
        .build()
        .await
        .unwrap();
    let (gateway, _log) = signed_in_gateway(&test).await;

    gateway
        .server_action(&id, ServerAction::Restart)
        .await
        .unwrap();

    assert_eq!(
        test.last_request().unwrap().path,
        format!("/api/servers/{}/restart", id)
    );
    assert_eq!(test.servers()[0]["status"], "running");
}

/// Tests that the metrics period travels as a query parameter.
///
/// Expected: GET /api/servers/:id/metrics?period=hour with 12 samples
#[tokio::test]
async fn requests_metrics_for_period() {
    let server = factory::server::create_server();
    let id = server["id"].as_str().unwrap().to_string();
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .with_server(server)
        .build()
        .await
        .unwrap();
    let (gateway, _log) = signed_in_gateway(&test).await;

    let metrics = gateway
        .get_server_metrics(&id, MetricsPeriod::Hour)
        .await
        .unwrap();

    assert_eq!(
        test.last_request().unwrap().path,
        format!("/api/servers/{}/metrics?period=hour", id)
    );
    assert_eq!(metrics.usage.len(), 12);
}

/// Tests deleting through the live API.
///
/// Expected: Ok, then a 404 "Server not found" on the next read
#[tokio::test]
async fn deletes_server() {
    let server = factory::server::create_server();
    let id = server["id"].as_str().unwrap().to_string();
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .with_server(server)
        .build()
        .await
        .unwrap();
    let (gateway, log) = signed_in_gateway(&test).await;

    gateway.delete_server(&id).await.unwrap();
    let err = gateway.get_server(&id).await.unwrap_err();

    assert_eq!(err.status(), 404);
    assert_eq!(log.errors(), vec!["Server not found"]);
}
