use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{BillingApi, NodeApi, ResourceGateway, ServerApi, UserApi},
        component::{
            page::{ErrorPage, LoadingPage},
            Page, UsageBar,
        },
        constant::SITE_NAME,
        model::{error::AppError, fetch::Fetch},
        router::Route,
        service::summary::ClusterSummary,
    },
    model::user::Role,
};

#[derive(Clone, PartialEq)]
struct Overview {
    summary: ClusterSummary,
    users: usize,
    admins: usize,
}

#[component]
pub fn Admin() -> Element {
    let gateway = use_context::<ResourceGateway>();
    let mut overview = use_signal(Fetch::<Overview>::default);

    let future = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let servers = gateway.get_servers().await?;
            let nodes = gateway.get_nodes().await?;
            let invoices = gateway.get_invoices().await?;
            let users = gateway.get_users().await?;

            Ok::<_, AppError>(Overview {
                summary: ClusterSummary::new(&servers, &nodes, &invoices),
                users: users.len(),
                admins: users.iter().filter(|u| u.role == Role::Admin).count(),
            })
        }
    });

    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to load admin overview: {}", err);
            }
            overview.set(result.clone().into());
        }
    });

    rsx! {
        Title { "Admin | {SITE_NAME}" }
        match overview() {
            Fetch::Loading => rsx! { LoadingPage {} },
            Fetch::Error(err) => rsx! { ErrorPage { status: err.status(), message: err.to_string() } },
            Fetch::Fetched(data) => rsx! {
                Page {
                    class: "flex flex-col gap-6",
                    h1 { class: "text-2xl font-bold", "Admin Panel" }
                    div {
                        class: "grid gap-4 md:grid-cols-3",
                        AdminCard {
                            title: "Users",
                            value: format!("{}", data.users),
                            detail: format!("{} administrators", data.admins),
                            to: Route::Users {},
                        }
                        AdminCard {
                            title: "Servers",
                            value: format!("{}", data.summary.servers.total()),
                            detail: format!("{} running, {} failed", data.summary.servers.running, data.summary.servers.failed),
                            to: Route::Statistics {},
                        }
                        AdminCard {
                            title: "Nodes",
                            value: format!("{} / {}", data.summary.online_nodes, data.summary.total_nodes),
                            detail: "Online nodes".to_string(),
                            to: Route::Nodes {},
                        }
                    }
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body gap-4",
                            h2 { class: "card-title", "Cluster Capacity" }
                            UsageBar {
                                label: "CPU",
                                percent: data.summary.cpu.percent(),
                                detail: format!("{:.0} / {:.0} cores", data.summary.cpu.used, data.summary.cpu.total),
                            }
                            UsageBar {
                                label: "Memory",
                                percent: data.summary.memory.percent(),
                                detail: format!("{:.0} / {:.0} GB", data.summary.memory.used, data.summary.memory.total),
                            }
                            UsageBar {
                                label: "Storage",
                                percent: data.summary.storage.percent(),
                                detail: format!("{:.0} / {:.0} GB", data.summary.storage.used, data.summary.storage.total),
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn AdminCard(title: &'static str, value: String, detail: String, to: Route) -> Element {
    rsx! {
        Link {
            to,
            class: "card bg-base-200 hover:bg-base-300",
            div {
                class: "card-body",
                h2 { class: "card-title text-sm opacity-70", "{title}" }
                p { class: "text-3xl font-bold", "{value}" }
                p { class: "text-xs opacity-60", "{detail}" }
            }
        }
    }
}
