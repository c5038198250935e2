use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ProxmoxApi, ResourceGateway},
        component::{
            page::{ErrorPage, LoadingPage},
            Field, FieldError, Page,
        },
        constant::SITE_NAME,
        model::fetch::Fetch,
        service::validation::{FieldErrors, ProxmoxAuth, ProxmoxForm},
        store::Notifier,
    },
    model::proxmox::ProxmoxConfigDto,
};

/// Which request the settings page is waiting for.
#[derive(Clone, Copy, PartialEq)]
enum Busy {
    Idle,
    Saving,
    Testing,
    Syncing,
}

#[component]
pub fn Settings() -> Element {
    let gateway = use_context::<ResourceGateway>();
    let notifier = use_context::<Notifier>();

    let mut stored = use_signal(Fetch::<ProxmoxConfigDto>::default);
    let mut form = use_signal(ProxmoxForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut busy = use_signal(|| Busy::Idle);

    let future = {
        let gateway = gateway.clone();
        use_resource(move || {
            let gateway = gateway.clone();
            async move { gateway.get_proxmox_config().await }
        })
    };

    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(config)) => {
            form.set(ProxmoxForm::from_config(config));
            stored.set(Fetch::Fetched(config.clone()));
        }
        Some(Err(err)) => {
            tracing::error!("Failed to fetch hypervisor settings: {}", err);
            stored.set(Fetch::Error(err.clone()));
        }
        None => (),
    });

    // Validated config from the form, keeping the stored node list
    let mut validated = move || {
        let node_list = stored
            .peek()
            .data()
            .map(|c| c.node_list.clone())
            .unwrap_or_default();
        match form().to_config(node_list) {
            Ok(config) => {
                errors.set(FieldErrors::new());
                Some(config)
            }
            Err(form_errors) => {
                errors.set(form_errors);
                None
            }
        }
    };

    let save = {
        let gateway = gateway.clone();
        let notifier = notifier.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(config) = validated() else {
                return;
            };

            let gateway = gateway.clone();
            let notifier = notifier.clone();
            busy.set(Busy::Saving);
            spawn(async move {
                if let Ok(saved) = gateway.save_proxmox_config(&config).await {
                    form.set(ProxmoxForm::from_config(&saved));
                    stored.set(Fetch::Fetched(saved));
                    notifier.success("Proxmox settings saved successfully");
                }
                busy.set(Busy::Idle);
            });
        }
    };

    let test = {
        let gateway = gateway.clone();
        let notifier = notifier.clone();
        move |_| {
            let Some(config) = validated() else {
                return;
            };

            let gateway = gateway.clone();
            let notifier = notifier.clone();
            busy.set(Busy::Testing);
            spawn(async move {
                if let Ok(result) = gateway.test_proxmox_connection(&config).await {
                    if result.success {
                        notifier.success(result.message);
                    } else {
                        notifier.error(result.message);
                    }
                }
                busy.set(Busy::Idle);
            });
        }
    };

    let sync = move |_| {
        let gateway = gateway.clone();
        let notifier = notifier.clone();
        busy.set(Busy::Syncing);
        spawn(async move {
            if let Ok(nodes) = gateway.sync_proxmox_nodes().await {
                notifier.success(format!("Synchronized {} nodes", nodes.len()));
            }
            busy.set(Busy::Idle);
        });
    };

    let current = form();
    let is_busy = busy() != Busy::Idle;

    rsx! {
        Title { "Settings | {SITE_NAME}" }
        match stored() {
            Fetch::Loading => rsx! { LoadingPage {} },
            Fetch::Error(err) => rsx! { ErrorPage { status: err.status(), message: err.to_string() } },
            Fetch::Fetched(config) => rsx! {
                Page {
                    class: "flex flex-col items-center gap-6",
                    div {
                        class: "w-full max-w-2xl flex flex-col gap-6",
                        h1 { class: "text-2xl font-bold", "Settings" }
                        form {
                            class: "card bg-base-200",
                            onsubmit: save,
                            div {
                                class: "card-body",
                                h2 { class: "card-title", "Proxmox VE Connection" }
                                Field {
                                    label: "API URL",
                                    input {
                                        class: "input w-full",
                                        placeholder: "https://proxmox.example.com:8006/api2/json",
                                        value: current.api_url.clone(),
                                        oninput: move |evt| form.write().api_url = evt.value(),
                                    }
                                    FieldError { errors: errors(), field: "api_url" }
                                }
                                div {
                                    role: "tablist",
                                    class: "tabs tabs-box my-2",
                                    button {
                                        r#type: "button",
                                        role: "tab",
                                        class: if current.auth == ProxmoxAuth::Password { "tab tab-active" } else { "tab" },
                                        onclick: move |_| form.write().auth = ProxmoxAuth::Password,
                                        "Username & Password"
                                    }
                                    button {
                                        r#type: "button",
                                        role: "tab",
                                        class: if current.auth == ProxmoxAuth::Token { "tab tab-active" } else { "tab" },
                                        onclick: move |_| form.write().auth = ProxmoxAuth::Token,
                                        "API Token"
                                    }
                                }
                                if current.auth == ProxmoxAuth::Password {
                                    Field {
                                        label: "Username",
                                        input {
                                            class: "input w-full",
                                            placeholder: "root@pam",
                                            value: current.username.clone(),
                                            oninput: move |evt| form.write().username = evt.value(),
                                        }
                                        FieldError { errors: errors(), field: "username" }
                                    }
                                    Field {
                                        label: "Password",
                                        input {
                                            r#type: "password",
                                            class: "input w-full",
                                            placeholder: "Leave empty to keep the current password",
                                            value: current.password.clone(),
                                            oninput: move |evt| form.write().password = evt.value(),
                                        }
                                    }
                                } else {
                                    Field {
                                        label: "Token name",
                                        input {
                                            class: "input w-full",
                                            placeholder: "root@pam!panel",
                                            value: current.token_name.clone(),
                                            oninput: move |evt| form.write().token_name = evt.value(),
                                        }
                                        FieldError { errors: errors(), field: "token_name" }
                                    }
                                    Field {
                                        label: "Token",
                                        input {
                                            r#type: "password",
                                            class: "input w-full",
                                            value: current.token.clone(),
                                            oninput: move |evt| form.write().token = evt.value(),
                                        }
                                        FieldError { errors: errors(), field: "token" }
                                    }
                                }
                                label {
                                    class: "label mt-2",
                                    input {
                                        r#type: "checkbox",
                                        class: "checkbox",
                                        checked: current.verify_ssl,
                                        onchange: move |evt| form.write().verify_ssl = evt.checked(),
                                    }
                                    "Verify SSL certificate"
                                }
                                div {
                                    class: "card-actions justify-end mt-4",
                                    button {
                                        r#type: "button",
                                        class: "btn",
                                        disabled: is_busy,
                                        onclick: test,
                                        if busy() == Busy::Testing {
                                            span { class: "loading loading-spinner loading-sm mr-2" }
                                        }
                                        "Test Connection"
                                    }
                                    button {
                                        r#type: "submit",
                                        class: "btn btn-primary",
                                        disabled: is_busy,
                                        if busy() == Busy::Saving {
                                            span { class: "loading loading-spinner loading-sm mr-2" }
                                        }
                                        "Save"
                                    }
                                }
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                h2 { class: "card-title", "Nodes" }
                                if config.node_list.is_empty() {
                                    p { class: "opacity-60", "No nodes configured" }
                                } else {
                                    div {
                                        class: "flex flex-wrap gap-2",
                                        for name in config.node_list.iter() {
                                            span { key: "{name}", class: "badge badge-outline", "{name}" }
                                        }
                                    }
                                }
                                div {
                                    class: "card-actions justify-end",
                                    button {
                                        class: "btn",
                                        disabled: is_busy,
                                        onclick: sync,
                                        if busy() == Busy::Syncing {
                                            span { class: "loading loading-spinner loading-sm mr-2" }
                                        }
                                        "Sync Nodes"
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
