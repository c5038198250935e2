use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::ResourceGateway,
    config::Config,
    constant::SITE_NAME,
    model::{notification::Notification, session::SessionState},
    router::Route,
    service::lifecycle::ServerLifecycle,
    store::{KeyValueStore, Notifier, SessionStore, StoredSession},
};

/// Shared application services, built once from the startup configuration.
#[derive(Clone)]
struct Services {
    config: Config,
    gateway: ResourceGateway,
    session: SessionStore,
    lifecycle: ServerLifecycle,
    notifier: Notifier,
}

fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Invalid configuration, using defaults: {}", err);
            Config::default()
        }
    }
}

#[cfg(feature = "web")]
fn key_value_store() -> Rc<dyn KeyValueStore> {
    Rc::new(crate::client::store::BrowserStore)
}

#[cfg(not(feature = "web"))]
fn key_value_store() -> Rc<dyn KeyValueStore> {
    Rc::new(crate::client::store::MemoryStore::new())
}

fn build_services(
    toasts: Signal<Vec<Notification>>,
    session_state: Signal<SessionState>,
) -> Services {
    let config = load_config();
    tracing::info!(
        "Starting {} in {:?} mode ({:?} lifecycle)",
        SITE_NAME,
        config.api_mode,
        config.transition_mode
    );

    let store = key_value_store();
    let notifier = Notifier::new(move |notification| {
        let mut toasts = toasts;
        toasts.write().push(notification);
    });

    let gateway = ResourceGateway::new(&config, store.clone(), notifier.clone());
    let session = SessionStore::new(
        gateway.clone(),
        Rc::new(StoredSession::new(store)),
        notifier.clone(),
    );
    session.on_change(move |state| {
        let mut session_state = session_state;
        session_state.set(state.clone());
    });
    let lifecycle = ServerLifecycle::new(gateway.clone(), &config, notifier.clone());

    Services {
        config,
        gateway,
        session,
        lifecycle,
        notifier,
    }
}

#[component]
pub fn App() -> Element {
    let toasts = use_context_provider(|| Signal::new(Vec::<Notification>::new()));
    let session_state = use_context_provider(|| Signal::new(SessionState::default()));

    let services = use_hook(|| build_services(toasts, session_state));
    use_context_provider(|| services.config.clone());
    use_context_provider(|| services.gateway.clone());
    use_context_provider(|| services.session.clone());
    use_context_provider(|| services.lifecycle.clone());
    use_context_provider(|| services.notifier.clone());

    // Hydrate the session once on first load
    let session = services.session.clone();
    use_future(move || {
        let session = session.clone();
        async move { session.restore_on_startup().await }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Control panel for virtual servers on Proxmox VE"
        }
        Router::<Route> {}
    }
}
