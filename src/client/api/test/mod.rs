use std::rc::Rc;

use serde_json::{json, Value};
use test_utils::{api::FailureBody, builder::TestBuilder, context::TestContext, factory};

use crate::{
    client::{
        api::{
            mock::seed::{ADMIN_EMAIL, ADMIN_ID, ADMIN_PASSWORD},
            AuthApi, Backend, BillingApi, CatalogApi, MockBackend, NodeApi, ProxmoxApi,
            ResourceGateway, ServerApi, UserApi,
        },
        config::{ApiMode, Config, TransitionMode},
        constant::MOCK_DATABASE_KEY,
        model::error::{ApiError, AppError, AuthError},
        store::{KeyValueStore, MemoryStore, NotificationLog, Notifier},
    },
    model::{
        billing::{PaymentGateway, TransactionKind, TransactionStatus},
        node::NodeStatus,
        proxmox::ProxmoxConfigDto,
        server::{CreateServerDto, MetricsPeriod, ServerAction, ServerStatus, UpdateServerDto},
        user::{CreateUserDto, Role, UpdateUserDto},
    },
};

mod live;
mod mock;

/// Gateway over a freshly seeded simulated backend.
fn mock_gateway() -> (ResourceGateway, MemoryStore, NotificationLog) {
    let store = MemoryStore::new();
    let (notifier, log) = Notifier::recording();
    let backend = MockBackend::new(Rc::new(store.clone()));

    (
        ResourceGateway::with_backend(Backend::Mock(backend), notifier),
        store,
        log,
    )
}

/// Gateway pointed at a running fake API.
fn live_gateway(test: &TestContext) -> (ResourceGateway, NotificationLog) {
    let config = Config {
        api_mode: ApiMode::Live,
        api_url: test.api_url.clone(),
        proxmox_url: test.proxmox_url.clone(),
        transition_mode: TransitionMode::Refresh,
    };
    let (notifier, log) = Notifier::recording();

    (
        ResourceGateway::new(&config, Rc::new(MemoryStore::new()), notifier),
        log,
    )
}

const OPERATOR_ID: &str = "7";
const OPERATOR_EMAIL: &str = "operator@example.com";
const OPERATOR_PASSWORD: &str = "operator-pass";

/// Regular account the fake API accepts with `OPERATOR_PASSWORD`.
fn operator() -> Value {
    factory::user::UserFactory::new()
        .id(OPERATOR_ID)
        .email(OPERATOR_EMAIL)
        .build()
}

/// Live gateway that has logged in as `operator()`.
async fn signed_in_gateway(test: &TestContext) -> (ResourceGateway, NotificationLog) {
    let (gateway, log) = live_gateway(test);
    gateway
        .quiet()
        .login(OPERATOR_EMAIL, OPERATOR_PASSWORD)
        .await
        .unwrap();

    (gateway, log)
}

fn new_server(name: &str) -> CreateServerDto {
    CreateServerDto {
        name: name.to_string(),
        node: "node02".to_string(),
        os_template: "debian-11".to_string(),
        password: "supersecret".to_string(),
        cpu: 2,
        memory: 4,
        storage: 40,
        plan_id: None,
    }
}
