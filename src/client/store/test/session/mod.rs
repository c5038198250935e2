use std::{cell::RefCell, rc::Rc};

use test_utils::{api::FailureBody, builder::TestBuilder, context::TestContext, factory};

use crate::{
    client::{
        api::{
            mock::seed::{ADMIN_EMAIL, ADMIN_ID, ADMIN_PASSWORD},
            AuthApi, ResourceGateway, UserApi,
        },
        config::{ApiMode, Config, TransitionMode},
        constant::{MOCK_DATABASE_KEY, SESSION_STORAGE_KEY},
        model::error::{AppError, AuthError},
        store::{
            KeyValueStore, MemoryStore, NotificationLog, Notifier, SessionPersistence,
            SessionStore, StoredSession,
        },
    },
    model::user::{UpdateUserDto, UserDto},
};

mod login;
mod logout;
mod refresh;
mod restore_on_startup;
mod update_profile;

struct Harness {
    session: SessionStore,
    gateway: ResourceGateway,
    store: MemoryStore,
    log: NotificationLog,
}

fn harness(config: &Config) -> Harness {
    harness_on(config, MemoryStore::new())
}

/// Harness over a store that may already hold persisted data.
fn harness_on(config: &Config, store: MemoryStore) -> Harness {
    let shared: Rc<dyn KeyValueStore> = Rc::new(store.clone());
    let (notifier, log) = Notifier::recording();

    let gateway = ResourceGateway::new(config, shared.clone(), notifier.clone());
    let session = SessionStore::new(
        gateway.clone(),
        Rc::new(StoredSession::new(shared)),
        notifier,
    );

    Harness {
        session,
        gateway,
        store,
        log,
    }
}

/// Session over the seeded simulated backend.
fn mock_session() -> Harness {
    harness(&Config::default())
}

/// Session against a running fake API.
fn live_session(test: &TestContext) -> Harness {
    harness(&Config {
        api_mode: ApiMode::Live,
        api_url: test.api_url.clone(),
        proxmox_url: test.proxmox_url.clone(),
        transition_mode: TransitionMode::Refresh,
    })
}

fn persisted(store: &MemoryStore) -> Option<UserDto> {
    StoredSession::new(Rc::new(store.clone())).load().unwrap()
}
