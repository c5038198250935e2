use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{BillingApi, NodeApi, ResourceGateway, ServerApi},
        component::{
            page::{ErrorPage, LoadingPage},
            Page, StatusBadge, UsageBar,
        },
        constant::SITE_NAME,
        model::{error::AppError, fetch::Fetch},
        router::Route,
        service::summary::ClusterSummary,
    },
    model::server::ServerDto,
};

#[derive(Clone, PartialEq)]
struct DashboardData {
    servers: Vec<ServerDto>,
    summary: ClusterSummary,
}

#[component]
pub fn Dashboard() -> Element {
    let gateway = use_context::<ResourceGateway>();
    let mut data = use_signal(Fetch::<DashboardData>::default);

    let future = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let servers = gateway.get_servers().await?;
            let nodes = gateway.get_nodes().await?;
            let invoices = gateway.get_invoices().await?;

            let summary = ClusterSummary::new(&servers, &nodes, &invoices);
            Ok::<_, AppError>(DashboardData { servers, summary })
        }
    });

    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to load dashboard: {}", err);
            }
            data.set(result.clone().into());
        }
    });

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        match data() {
            Fetch::Loading => rsx! { LoadingPage {} },
            Fetch::Error(err) => rsx! { ErrorPage { status: err.status(), message: err.to_string() } },
            Fetch::Fetched(data) => rsx! {
                Page {
                    class: "flex flex-col gap-6",
                    div {
                        class: "flex items-center justify-between",
                        h1 { class: "text-2xl font-bold", "Dashboard" }
                        Link { to: Route::NewServer {}, class: "btn btn-primary", "New Server" }
                    }
                    div {
                        class: "stats stats-vertical md:stats-horizontal bg-base-200 w-full",
                        div {
                            class: "stat",
                            div { class: "stat-title", "Servers" }
                            div {
                                class: "stat-value",
                                {format!("{} / {}", data.summary.servers.running, data.summary.servers.total())}
                            }
                            div { class: "stat-desc", "Active servers" }
                        }
                        div {
                            class: "stat",
                            div { class: "stat-title", "Nodes" }
                            div { class: "stat-value", "{data.summary.online_nodes} / {data.summary.total_nodes}" }
                            div { class: "stat-desc", "Online nodes" }
                        }
                        div {
                            class: "stat",
                            div { class: "stat-title", "Invoices" }
                            div { class: "stat-value", "{data.summary.pending_invoices}" }
                            div { class: "stat-desc", "Pending invoices" }
                        }
                    }
                    div {
                        class: "grid gap-6 lg:grid-cols-3",
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body gap-4",
                                h2 { class: "card-title", "Cluster Resources" }
                                UsageBar { label: "CPU", percent: data.summary.cpu.percent() }
                                UsageBar { label: "Memory", percent: data.summary.memory.percent() }
                                UsageBar { label: "Storage", percent: data.summary.storage.percent() }
                            }
                        }
                        div {
                            class: "card bg-base-200 lg:col-span-2",
                            div {
                                class: "card-body",
                                div {
                                    class: "flex items-center justify-between",
                                    h2 { class: "card-title", "Your Servers" }
                                    Link { to: Route::Servers {}, class: "btn btn-sm btn-ghost", "View all" }
                                }
                                if data.servers.is_empty() {
                                    p { class: "opacity-50 py-4", "No servers yet" }
                                } else {
                                    table {
                                        class: "table",
                                        thead {
                                            tr {
                                                th { "Name" }
                                                th { "Status" }
                                                th { "Node" }
                                                th { "IP Address" }
                                            }
                                        }
                                        tbody {
                                            for server in data.servers.iter().take(5) {
                                                tr {
                                                    key: "{server.id}",
                                                    td { "{server.name}" }
                                                    td { StatusBadge { status: server.status.as_str() } }
                                                    td { "{server.node}" }
                                                    td { "{server.ip_address}" }
                                                }
                                            }
                                        }
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
