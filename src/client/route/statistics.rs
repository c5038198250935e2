use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{NodeApi, ResourceGateway, ServerApi},
    component::{
        page::{ErrorPage, LoadingPage},
        Page, UsageBar,
    },
    constant::SITE_NAME,
    model::{error::AppError, fetch::Fetch},
    service::summary::{servers_per_node, ClusterSummary},
};

#[derive(Clone, PartialEq)]
struct StatisticsData {
    summary: ClusterSummary,
    per_node: Vec<(String, usize)>,
}

#[component]
pub fn Statistics() -> Element {
    let gateway = use_context::<ResourceGateway>();
    let mut stats = use_signal(Fetch::<StatisticsData>::default);

    let future = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let servers = gateway.get_servers().await?;
            let nodes = gateway.get_nodes().await?;

            let per_node = servers_per_node(&servers, &nodes)
                .into_iter()
                .map(|(name, count)| (name.to_string(), count))
                .collect();
            Ok::<_, AppError>(StatisticsData {
                summary: ClusterSummary::new(&servers, &nodes, &[]),
                per_node,
            })
        }
    });

    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to load statistics: {}", err);
            }
            stats.set(result.clone().into());
        }
    });

    rsx! {
        Title { "Statistics | {SITE_NAME}" }
        match stats() {
            Fetch::Loading => rsx! { LoadingPage {} },
            Fetch::Error(err) => rsx! { ErrorPage { status: err.status(), message: err.to_string() } },
            Fetch::Fetched(data) => {
                let total = data.summary.servers.total();
                let share = move |count: usize| {
                    if total == 0 { 0.0 } else { count as f64 / total as f64 * 100.0 }
                };

                rsx! {
                    Page {
                        class: "flex flex-col gap-6",
                        h1 { class: "text-2xl font-bold", "Statistics" }
                        div {
                            class: "grid gap-6 lg:grid-cols-2",
                            div {
                                class: "card bg-base-200",
                                div {
                                    class: "card-body gap-4",
                                    h2 { class: "card-title", "Server Status" }
                                    UsageBar {
                                        label: "Running",
                                        percent: share(data.summary.servers.running),
                                        detail: format!("{}", data.summary.servers.running),
                                    }
                                    UsageBar {
                                        label: "Stopped",
                                        percent: share(data.summary.servers.stopped),
                                        detail: format!("{}", data.summary.servers.stopped),
                                    }
                                    UsageBar {
                                        label: "Failed",
                                        percent: share(data.summary.servers.failed),
                                        detail: format!("{}", data.summary.servers.failed),
                                    }
                                }
                            }
                            div {
                                class: "card bg-base-200",
                                div {
                                    class: "card-body gap-4",
                                    h2 { class: "card-title", "Servers per Node" }
                                    for (name, count) in data.per_node.iter() {
                                        UsageBar {
                                            key: "{name}",
                                            label: name.clone(),
                                            percent: share(*count),
                                            detail: format!("{}", count),
                                        }
                                    }
                                }
                            }
                            div {
                                class: "card bg-base-200 lg:col-span-2",
                                div {
                                    class: "card-body gap-4",
                                    h2 { class: "card-title", "Resource Allocation" }
                                    UsageBar { label: "CPU", percent: data.summary.cpu.percent() }
                                    UsageBar { label: "Memory", percent: data.summary.memory.percent() }
                                    UsageBar { label: "Storage", percent: data.summary.storage.percent() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
