use dioxus::prelude::*;

/// Colored pill for server, node and invoice states.
#[component]
pub fn StatusBadge(status: &'static str) -> Element {
    let color = match status {
        "running" | "online" | "paid" | "completed" => "badge-success",
        "stopped" | "maintenance" | "pending" => "badge-warning",
        "failed" | "offline" | "cancelled" => "badge-error",
        _ => "badge-ghost",
    };

    rsx!(span { class: "badge badge-sm {color}", "{status}" })
}

/// Labelled progress bar for a capacity percentage.
#[component]
pub fn UsageBar(label: String, percent: f64, detail: Option<String>) -> Element {
    let color = if percent >= 90.0 {
        "progress-error"
    } else if percent >= 70.0 {
        "progress-warning"
    } else {
        "progress-primary"
    };

    rsx!(
        div {
            class: "flex flex-col gap-1",
            div {
                class: "flex justify-between text-sm",
                span { "{label}" }
                span { class: "opacity-70", {detail.unwrap_or_else(|| format!("{:.0}%", percent))} }
            }
            progress {
                class: "progress {color} w-full",
                value: "{percent:.0}",
                max: "100",
            }
        }
    )
}
