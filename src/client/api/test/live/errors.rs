use super::*;

/// Tests that a JSON `message` body becomes the error message.
///
/// Expected: Err(ApiError) with status 500 and the server's message, notified once
#[tokio::test]
async fn uses_message_from_json_body() {
    let test = TestBuilder::new()
        .with_failure(
            "GET",
            "/api/servers",
            500,
            FailureBody::Message("Database unavailable".to_string()),
        )
        .build()
        .await
        .unwrap();
    let (gateway, log) = live_gateway(&test);

    let result = gateway.get_servers().await;

    assert_eq!(
        result,
        Err(AppError::Api(ApiError {
            status: 500,
            message: "Database unavailable".to_string(),
        }))
    );
    assert_eq!(log.errors(), vec!["Database unavailable"]);
}

/// Tests the fallback for a JSON body without a message.
///
/// Expected: "API error: 503"
#[tokio::test]
async fn falls_back_to_status_for_json_without_message() {
    let test = TestBuilder::new()
        .with_failure("GET", "/api/nodes", 503, FailureBody::EmptyJson)
        .build()
        .await
        .unwrap();
    let (gateway, log) = live_gateway(&test);

    let err = gateway.get_nodes().await.unwrap_err();

    assert_eq!(err.to_string(), "API error: 503");
    assert_eq!(err.status(), 503);
    assert_eq!(log.errors(), vec!["API error: 503"]);
}

/// Tests the fallback label of the hypervisor-proxy API.
///
/// Expected: "Proxmox API error: 502"
#[tokio::test]
async fn labels_proxmox_failures() {
    let test = TestBuilder::new()
        .with_failure(
            "GET",
            "/proxmox/api/settings/proxmox",
            502,
            FailureBody::EmptyJson,
        )
        .build()
        .await
        .unwrap();
    let (gateway, _log) = live_gateway(&test);

    let err = gateway.get_proxmox_config().await.unwrap_err();

    assert_eq!(err.to_string(), "Proxmox API error: 502");
}

/// Tests a non-JSON error body.
///
/// Expected: "Unknown error" with the response status kept
#[tokio::test]
async fn reports_unknown_error_for_plain_text() {
    let test = TestBuilder::new()
        .with_failure(
            "GET",
            "/api/servers",
            502,
            FailureBody::PlainText("Bad Gateway".to_string()),
        )
        .build()
        .await
        .unwrap();
    let (gateway, _log) = live_gateway(&test);

    let err = gateway.get_servers().await.unwrap_err();

    assert_eq!(
        err,
        AppError::Api(ApiError {
            status: 502,
            message: "Unknown error".to_string(),
        })
    );
}

/// Tests an unreachable API.
///
/// Verifies that a transport failure is reported with status 0 and is not
/// retried.
///
/// Expected: Err(ApiError) with status 0 and a send failure message
#[tokio::test]
async fn reports_transport_failure_with_status_zero() {
    let config = Config {
        api_mode: ApiMode::Live,
        api_url: "http://127.0.0.1:1/api".to_string(),
        ..Config::default()
    };
    let (notifier, log) = Notifier::recording();
    let gateway = ResourceGateway::new(&config, Rc::new(MemoryStore::new()), notifier);

    let err = gateway.get_servers().await.unwrap_err();

    assert_eq!(err.status(), 0);
    assert!(err.to_string().starts_with("Failed to send request"));
    assert_eq!(log.errors().len(), 1);
}

/// Tests a success response whose body does not decode.
///
/// Expected: Err(ApiError) starting with "Failed to parse response"
#[tokio::test]
async fn reports_undecodable_success_body() {
    let test = TestBuilder::new()
        .with_user(operator(), OPERATOR_PASSWORD)
        .with_node(json!({ "unexpected": true }))
        .build()
        .await
        .unwrap();
    let (gateway, _log) = signed_in_gateway(&test).await;

    let err = gateway.get_nodes().await.unwrap_err();

    assert!(err.to_string().starts_with("Failed to parse response"));
}
