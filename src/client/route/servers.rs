use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ResourceGateway, ServerApi},
        component::{
            page::{ErrorPage, LoadingPage},
            ConfirmationModal, Page, StatusBadge,
        },
        constant::SITE_NAME,
        model::fetch::Fetch,
        router::Route,
        service::lifecycle::ServerLifecycle,
    },
    model::server::{MetricsPeriod, ServerAction, ServerDto},
};

#[component]
pub fn Servers() -> Element {
    let gateway = use_context::<ResourceGateway>();
    let lifecycle = use_context::<ServerLifecycle>();

    let mut servers = use_signal(Fetch::<Vec<ServerDto>>::default);
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| None::<String>);
    let mut to_delete = use_signal(|| None::<ServerDto>);
    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    let future = use_resource(move || {
        let gateway = gateway.clone();
        async move { gateway.get_servers().await }
    });

    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch servers: {}", err);
            }
            servers.set(result.clone().into());
        }
    });

    let run_action = {
        let lifecycle = lifecycle.clone();
        use_callback(move |(id, action): (String, ServerAction)| {
            let lifecycle = lifecycle.clone();
            spawn(async move {
                let server = servers
                    .peek()
                    .data()
                    .and_then(|list| list.iter().find(|s| s.id == id).cloned());
                let Some(server) = server else {
                    return;
                };
                if let Ok((_, change)) = lifecycle.transition(&server, action).await {
                    if let Some(list) = servers.write().data_mut() {
                        change.apply_to(list);
                    }
                }
            });
        })
    };

    let delete_server = use_callback(move |_: ()| {
        let Some(server) = to_delete() else {
            return;
        };
        let lifecycle = lifecycle.clone();
        is_deleting.set(true);
        spawn(async move {
            if let Ok(change) = lifecycle.remove(&server.id).await {
                if let Some(list) = servers.write().data_mut() {
                    change.apply_to(list);
                }
                if selected.peek().as_deref() == Some(server.id.as_str()) {
                    selected.set(None);
                }
                show_delete_modal.set(false);
            }
            is_deleting.set(false);
        });
    });

    let delete_message = to_delete()
        .map(|s| format!("Delete server \"{}\"? This cannot be undone.", s.name))
        .unwrap_or_default();

    rsx! {
        Title { "Servers | {SITE_NAME}" }
        match servers() {
            Fetch::Loading => rsx! { LoadingPage {} },
            Fetch::Error(err) => rsx! { ErrorPage { status: err.status(), message: err.to_string() } },
            Fetch::Fetched(list) => rsx! {
                Page {
                    class: "flex flex-col gap-6",
                    div {
                        class: "flex flex-wrap items-center justify-between gap-4",
                        h1 { class: "text-2xl font-bold", "Servers" }
                        div {
                            class: "flex gap-2",
                            input {
                                class: "input",
                                placeholder: "Search servers...",
                                value: "{search}",
                                oninput: move |evt| search.set(evt.value()),
                            }
                            Link { to: Route::NewServer {}, class: "btn btn-primary", "New Server" }
                        }
                    }
                    ServerTable {
                        servers: list.into_iter().filter(|s| s.matches(&search())).collect::<Vec<_>>(),
                        on_action: run_action,
                        on_select: move |id| selected.set(Some(id)),
                        on_delete: move |server| {
                            to_delete.set(Some(server));
                            show_delete_modal.set(true);
                        },
                    }
                    if let Some(id) = selected() {
                        ServerMetrics { key: "{id}", server_id: id.clone() }
                    }
                }
            },
        }
        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete Server",
            message: delete_message,
            confirm_text: "Delete",
            is_processing: is_deleting(),
            on_confirm: move |_| delete_server.call(()),
        }
    }
}

#[component]
fn ServerTable(
    servers: Vec<ServerDto>,
    on_action: Callback<(String, ServerAction)>,
    on_select: EventHandler<String>,
    on_delete: EventHandler<ServerDto>,
) -> Element {
    rsx! {
        if servers.is_empty() {
            div {
                class: "text-center py-8 opacity-50",
                "No servers found"
            }
        } else {
            div {
                class: "overflow-x-auto card bg-base-200",
                table {
                    class: "table w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Status" }
                            th { "Node" }
                            th { "IP Address" }
                            th { "Resources" }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for server in servers {
                            {
                                let id = server.id.clone();
                                let status = server.status;
                                rsx! {
                                    tr {
                                        key: "{server.id}",
                                        td {
                                            button {
                                                class: "link link-hover",
                                                onclick: {
                                                    let id = id.clone();
                                                    move |_| on_select.call(id.clone())
                                                },
                                                "{server.name}"
                                            }
                                        }
                                        td { StatusBadge { status: status.as_str() } }
                                        td { "{server.node}" }
                                        td { "{server.ip_address}" }
                                        td { "{server.cpu} vCPU / {server.memory} GB / {server.storage} GB" }
                                        td {
                                            div {
                                                class: "flex gap-1 justify-end",
                                                for action in [ServerAction::Start, ServerAction::Stop, ServerAction::Restart] {
                                                    button {
                                                        class: "btn btn-xs",
                                                        disabled: !action.is_allowed(status),
                                                        onclick: {
                                                            let id = id.clone();
                                                            move |_| on_action.call((id.clone(), action))
                                                        },
                                                        {action_label(action)}
                                                    }
                                                }
                                                button {
                                                    class: "btn btn-xs btn-error",
                                                    onclick: {
                                                        let server = server.clone();
                                                        move |_| on_delete.call(server.clone())
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn action_label(action: ServerAction) -> &'static str {
    match action {
        ServerAction::Start => "Start",
        ServerAction::Stop => "Stop",
        ServerAction::Restart => "Restart",
    }
}

#[component]
fn ServerMetrics(server_id: String) -> Element {
    let gateway = use_context::<ResourceGateway>();
    let mut period = use_signal(MetricsPeriod::default);

    let metrics = use_resource(move || {
        let gateway = gateway.clone();
        let id = server_id.clone();
        let period = period();
        async move { gateway.get_server_metrics(&id, period).await }
    });

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "card-title", "Resource Usage" }
                    div {
                        role: "tablist",
                        class: "tabs tabs-box tabs-sm",
                        for option in MetricsPeriod::ALL {
                            button {
                                role: "tab",
                                class: if period() == option { "tab tab-active" } else { "tab" },
                                onclick: move |_| period.set(option),
                                {option.as_str()}
                            }
                        }
                    }
                }
                match &*metrics.read_unchecked() {
                    None => rsx! { span { class: "loading loading-spinner" } },
                    Some(Err(err)) => rsx! { p { class: "text-error", "{err}" } },
                    Some(Ok(usage)) => rsx! {
                        div {
                            class: "overflow-x-auto max-h-80",
                            table {
                                class: "table table-xs table-pin-rows",
                                thead {
                                    tr {
                                        th { "Time" }
                                        th { "CPU %" }
                                        th { "Memory %" }
                                        th { "Disk %" }
                                        th { "Net in / out" }
                                    }
                                }
                                tbody {
                                    for point in usage.usage.iter().rev() {
                                        tr {
                                            key: "{point.timestamp}",
                                            td { {point.timestamp.format("%Y-%m-%d %H:%M").to_string()} }
                                            td { "{point.cpu:.1}" }
                                            td { "{point.memory:.1}" }
                                            td { "{point.disk:.1}" }
                                            td { "{point.network.inbound:.1} / {point.network.outbound:.1}" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
