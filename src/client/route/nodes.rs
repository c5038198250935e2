use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{NodeApi, ProxmoxApi, ResourceGateway},
        component::{
            page::{ErrorPage, LoadingPage},
            Page, StatusBadge, UsageBar,
        },
        constant::SITE_NAME,
        model::fetch::Fetch,
        store::Notifier,
    },
    model::node::NodeDto,
};

#[component]
pub fn Nodes() -> Element {
    let gateway = use_context::<ResourceGateway>();
    let notifier = use_context::<Notifier>();

    let mut nodes = use_signal(Fetch::<Vec<NodeDto>>::default);
    let mut is_syncing = use_signal(|| false);

    let future = {
        let gateway = gateway.clone();
        use_resource(move || {
            let gateway = gateway.clone();
            async move { gateway.get_nodes().await }
        })
    };

    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch nodes: {}", err);
            }
            nodes.set(result.clone().into());
        }
    });

    let sync = move |_| {
        let gateway = gateway.clone();
        let notifier = notifier.clone();
        is_syncing.set(true);
        spawn(async move {
            if let Ok(synced) = gateway.sync_proxmox_nodes().await {
                notifier.success(format!("Synchronized {} nodes", synced.len()));
                nodes.set(Fetch::Fetched(synced));
            }
            is_syncing.set(false);
        });
    };

    rsx! {
        Title { "Nodes | {SITE_NAME}" }
        match nodes() {
            Fetch::Loading => rsx! { LoadingPage {} },
            Fetch::Error(err) => rsx! { ErrorPage { status: err.status(), message: err.to_string() } },
            Fetch::Fetched(list) => rsx! {
                Page {
                    class: "flex flex-col gap-6",
                    div {
                        class: "flex items-center justify-between",
                        h1 { class: "text-2xl font-bold", "Nodes" }
                        button {
                            class: "btn btn-primary",
                            disabled: is_syncing(),
                            onclick: sync,
                            if is_syncing() {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                            }
                            "Sync from Proxmox"
                        }
                    }
                    if list.is_empty() {
                        div { class: "text-center py-8 opacity-50", "No nodes found" }
                    }
                    div {
                        class: "grid gap-4 md:grid-cols-2 xl:grid-cols-3",
                        for node in list {
                            div {
                                key: "{node.id}",
                                class: "card bg-base-200",
                                div {
                                    class: "card-body gap-3",
                                    div {
                                        class: "flex items-center justify-between",
                                        h2 { class: "card-title", "{node.name}" }
                                        StatusBadge { status: node.status.as_str() }
                                    }
                                    UsageBar {
                                        label: "CPU",
                                        percent: node.cpu_percent(),
                                        detail: format!("{:.0} / {:.0} cores", node.cpu_used, node.cpu_total),
                                    }
                                    UsageBar {
                                        label: "Memory",
                                        percent: node.memory_percent(),
                                        detail: format!("{:.0} / {:.0} GB", node.memory_used, node.memory_total),
                                    }
                                    UsageBar {
                                        label: "Storage",
                                        percent: node.storage_percent(),
                                        detail: format!("{:.0} / {:.0} GB", node.storage_used, node.storage_total),
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
