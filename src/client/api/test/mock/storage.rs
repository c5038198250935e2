use super::*;

/// Tests that the simulated dataset survives a reload.
///
/// Verifies that a second backend opened on the same store sees a server
/// created through the first one.
///
/// Expected: four servers, including the new one
#[tokio::test]
async fn dataset_survives_reload() {
    let (gateway, store, _log) = logged_in_gateway().await;
    let created = gateway.create_server(&new_server("web-2")).await.unwrap();

    let reopened = MockBackend::new(Rc::new(store));
    let servers = reopened.get_servers().await.unwrap();

    assert_eq!(servers.len(), 4);
    assert!(servers.contains(&created));
}

/// Tests that an undecodable dataset is replaced by the seed.
///
/// Expected: the three seeded servers
#[tokio::test]
async fn corrupt_dataset_is_reseeded() {
    let store = MemoryStore::new();
    store.set(MOCK_DATABASE_KEY, "{not json").unwrap();

    let backend = MockBackend::new(Rc::new(store));

    assert_eq!(backend.get_servers().await.unwrap().len(), 3);
}

/// Tests that reads alone never write the dataset.
///
/// Expected: nothing stored until the first write
#[tokio::test]
async fn reads_do_not_persist() {
    let (gateway, store, _log) = mock_gateway();

    gateway.get_servers().await.unwrap();
    assert!(!store.contains(MOCK_DATABASE_KEY));

    gateway.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    assert!(store.contains(MOCK_DATABASE_KEY));
}

/// Tests that the catalogues are served from the seed.
///
/// Expected: non-empty templates and plans, every seeded server's template listed
#[tokio::test]
async fn serves_catalogues() {
    let (gateway, _store, _log) = mock_gateway();

    let templates = gateway.get_os_templates().await.unwrap();
    let plans = gateway.get_plans().await.unwrap();
    let servers = gateway.get_servers().await.unwrap();

    assert!(!plans.is_empty());
    assert!(servers
        .iter()
        .all(|s| templates.iter().any(|t| t.id == s.os_template)));
}

/// Tests node lookup by id.
///
/// Expected: node02 for id 2, NotFound for an unknown id
#[tokio::test]
async fn looks_up_nodes() {
    let (gateway, _store, _log) = mock_gateway();

    assert_eq!(gateway.get_node("2").await.unwrap().name, "node02");
    assert!(matches!(
        gateway.get_node("42").await,
        Err(AppError::NotFound(_))
    ));
}
