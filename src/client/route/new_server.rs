use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{CatalogApi, NodeApi, ResourceGateway},
        component::{
            page::{ErrorPage, LoadingPage},
            Field, FieldError, Page,
        },
        constant::SITE_NAME,
        model::{error::AppError, fetch::Fetch},
        router::Route,
        service::{
            lifecycle::ServerLifecycle,
            provision::{
                PlanChoice, ServerWizard, WizardStep, CPU_RANGE, MEMORY_RANGE, STORAGE_RANGE,
            },
            validation::FieldErrors,
        },
    },
    model::{
        catalog::OsTemplateDto,
        node::{NodeDto, NodeStatus},
    },
};

#[derive(Clone, PartialEq)]
struct Catalogue {
    nodes: Vec<NodeDto>,
    templates: Vec<OsTemplateDto>,
}

#[component]
pub fn NewServer() -> Element {
    let gateway = use_context::<ResourceGateway>();
    let lifecycle = use_context::<ServerLifecycle>();
    let nav = navigator();

    let mut catalogue = use_signal(Fetch::<Catalogue>::default);
    let mut wizard = use_signal(|| None::<ServerWizard>);
    let mut errors = use_signal(FieldErrors::new);
    let mut is_creating = use_signal(|| false);

    let future = use_resource(move || {
        let gateway = gateway.clone();
        async move {
            let nodes: Vec<NodeDto> = gateway
                .get_nodes()
                .await?
                .into_iter()
                .filter(|n| n.status == NodeStatus::Online)
                .collect();
            let templates = gateway.get_os_templates().await?;
            let plans = gateway.get_plans().await?;
            Ok::<_, AppError>((Catalogue { nodes, templates }, plans))
        }
    });

    use_effect(move || match &*future.read_unchecked() {
        Some(Ok((loaded, plans))) => {
            wizard.set(Some(ServerWizard::new(
                &loaded.nodes,
                &loaded.templates,
                plans.clone(),
            )));
            catalogue.set(Fetch::Fetched(loaded.clone()));
        }
        Some(Err(err)) => {
            tracing::error!("Failed to load server catalogue: {}", err);
            catalogue.set(Fetch::Error(err.clone()));
        }
        None => (),
    });

    let next = move |_| {
        let mut current = wizard.write();
        if let Some(w) = current.as_mut() {
            match w.next() {
                Ok(_) => errors.set(FieldErrors::new()),
                Err(step_errors) => errors.set(step_errors),
            }
        }
    };

    let previous = move |_| {
        if let Some(w) = wizard.write().as_mut() {
            w.previous();
        }
        errors.set(FieldErrors::new());
    };

    let create = move |_| {
        let Some(current) = wizard() else {
            return;
        };
        let request = match current.build_request() {
            Ok(request) => request,
            Err(all_errors) => {
                errors.set(all_errors);
                return;
            }
        };

        let lifecycle = lifecycle.clone();
        is_creating.set(true);
        spawn(async move {
            if lifecycle.create(&request).await.is_ok() {
                nav.push(Route::Servers {});
            }
            is_creating.set(false);
        });
    };

    rsx! {
        Title { "New Server | {SITE_NAME}" }
        match (catalogue(), wizard()) {
            (Fetch::Error(err), _) => rsx! { ErrorPage { status: err.status(), message: err.to_string() } },
            (Fetch::Fetched(loaded), Some(current)) => rsx! {
                Page {
                    class: "flex flex-col items-center gap-6",
                    div {
                        class: "w-full max-w-3xl flex flex-col gap-6",
                        h1 { class: "text-2xl font-bold", "Create New Server" }
                        ul {
                            class: "steps w-full",
                            for step in WizardStep::ALL {
                                li {
                                    class: if step <= current.step { "step step-primary" } else { "step" },
                                    {step.title()}
                                }
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                h2 {
                                    class: "card-title",
                                    {format!("Step {}: {}", current.step.number(), current.step.title())}
                                }
                                match current.step {
                                    WizardStep::Name => rsx! { NameStep { wizard, errors: errors() } },
                                    WizardStep::Node => rsx! { NodeStep { wizard, nodes: loaded.nodes.clone(), errors: errors() } },
                                    WizardStep::Template => rsx! { TemplateStep { wizard, templates: loaded.templates.clone(), errors: errors() } },
                                    WizardStep::Plan => rsx! { PlanStep { wizard, errors: errors() } },
                                    WizardStep::Review => rsx! { ReviewStep { wizard: current.clone(), templates: loaded.templates.clone() } },
                                }
                                div {
                                    class: "card-actions justify-between mt-4",
                                    button {
                                        class: "btn",
                                        disabled: current.step == WizardStep::Name || is_creating(),
                                        onclick: previous,
                                        "Back"
                                    }
                                    if current.step == WizardStep::Review {
                                        button {
                                            class: "btn btn-primary",
                                            disabled: is_creating(),
                                            onclick: create,
                                            if is_creating() {
                                                span { class: "loading loading-spinner loading-sm mr-2" }
                                            }
                                            "Create Server"
                                        }
                                    } else {
                                        button { class: "btn btn-primary", onclick: next, "Next" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            _ => rsx! { LoadingPage {} },
        }
    }
}

#[component]
fn NameStep(mut wizard: Signal<Option<ServerWizard>>, errors: FieldErrors) -> Element {
    let Some(current) = wizard() else {
        return rsx! {};
    };

    rsx! {
        Field {
            label: "Server name",
            input {
                class: "input w-full",
                placeholder: "web-01",
                value: "{current.name}",
                oninput: move |evt| {
                    if let Some(w) = wizard.write().as_mut() {
                        w.name = evt.value();
                    }
                },
            }
            FieldError { errors: errors.clone(), field: "name" }
        }
        Field {
            label: "Root password",
            input {
                r#type: "password",
                class: "input w-full",
                value: "{current.password}",
                oninput: move |evt| {
                    if let Some(w) = wizard.write().as_mut() {
                        w.password = evt.value();
                    }
                },
            }
            FieldError { errors, field: "password" }
        }
    }
}

#[component]
fn NodeStep(
    mut wizard: Signal<Option<ServerWizard>>,
    nodes: Vec<NodeDto>,
    errors: FieldErrors,
) -> Element {
    let selected = wizard().and_then(|w| w.node);

    rsx! {
        if nodes.is_empty() {
            p { class: "opacity-60", "No online nodes are available" }
        }
        div {
            class: "grid gap-2 md:grid-cols-2",
            for node in nodes {
                {
                    let name = node.name.clone();
                    let active = selected.as_deref() == Some(node.name.as_str());
                    rsx! {
                        label {
                            key: "{node.id}",
                            class: "flex items-center gap-3 p-3 rounded-box bg-base-100 cursor-pointer",
                            input {
                                r#type: "radio",
                                class: "radio",
                                name: "node",
                                checked: active,
                                onchange: move |_| {
                                    if let Some(w) = wizard.write().as_mut() {
                                        w.node = Some(name.clone());
                                    }
                                },
                            }
                            div {
                                p { class: "font-semibold", "{node.name}" }
                                p {
                                    class: "text-xs opacity-60",
                                    {format!(
                                        "CPU {:.0}% · Memory {:.0}% · Storage {:.0}%",
                                        node.cpu_percent(),
                                        node.memory_percent(),
                                        node.storage_percent()
                                    )}
                                }
                            }
                        }
                    }
                }
            }
        }
        FieldError { errors, field: "node" }
    }
}

#[component]
fn TemplateStep(
    mut wizard: Signal<Option<ServerWizard>>,
    templates: Vec<OsTemplateDto>,
    errors: FieldErrors,
) -> Element {
    let selected = wizard().and_then(|w| w.os_template);

    rsx! {
        div {
            class: "grid gap-2 md:grid-cols-2",
            for template in templates {
                {
                    let id = template.id.clone();
                    let active = selected.as_deref() == Some(template.id.as_str());
                    rsx! {
                        label {
                            key: "{template.id}",
                            class: "flex items-center gap-3 p-3 rounded-box bg-base-100 cursor-pointer",
                            input {
                                r#type: "radio",
                                class: "radio",
                                name: "os_template",
                                checked: active,
                                onchange: move |_| {
                                    if let Some(w) = wizard.write().as_mut() {
                                        w.os_template = Some(id.clone());
                                    }
                                },
                            }
                            div {
                                p { class: "font-semibold", "{template.name}" }
                                p { class: "text-xs opacity-60", "{template.description}" }
                            }
                        }
                    }
                }
            }
        }
        FieldError { errors, field: "os_template" }
    }
}

#[component]
fn PlanStep(mut wizard: Signal<Option<ServerWizard>>, errors: FieldErrors) -> Element {
    let Some(current) = wizard() else {
        return rsx! {};
    };
    let custom = current.custom;

    rsx! {
        div {
            class: "grid gap-2 md:grid-cols-3",
            for plan in current.plans().to_vec() {
                {
                    let choice = PlanChoice::Predefined(plan.id.clone());
                    let active = current.plan.as_ref() == Some(&choice);
                    rsx! {
                        button {
                            key: "{plan.id}",
                            class: if active { "card bg-primary text-primary-content" } else { "card bg-base-100" },
                            onclick: move |_| {
                                if let Some(w) = wizard.write().as_mut() {
                                    w.plan = Some(choice.clone());
                                }
                            },
                            div {
                                class: "card-body p-4 items-start",
                                p { class: "font-semibold", "{plan.name}" }
                                p { class: "text-sm", "{plan.cpu} vCPU · {plan.memory} GB RAM · {plan.storage} GB SSD" }
                                p { class: "text-lg font-bold", "${plan.price:.2}/mo" }
                            }
                        }
                    }
                }
            }
        }
        label {
            class: "label mt-4",
            input {
                r#type: "checkbox",
                class: "toggle",
                checked: current.is_custom(),
                onchange: move |evt| {
                    if let Some(w) = wizard.write().as_mut() {
                        w.plan = if evt.checked() {
                            Some(PlanChoice::Custom)
                        } else {
                            w.plans().first().map(|p| PlanChoice::Predefined(p.id.clone()))
                        };
                    }
                },
            }
            "Custom configuration"
        }
        if current.is_custom() {
            div {
                class: "grid gap-4 md:grid-cols-3",
                ResourceSlider {
                    label: "CPU cores",
                    value: custom.cpu,
                    min: *CPU_RANGE.start(),
                    max: *CPU_RANGE.end(),
                    unit: "",
                    on_change: move |value| {
                        if let Some(w) = wizard.write().as_mut() {
                            w.custom.cpu = value;
                        }
                    },
                }
                ResourceSlider {
                    label: "Memory",
                    value: custom.memory,
                    min: *MEMORY_RANGE.start(),
                    max: *MEMORY_RANGE.end(),
                    unit: " GB",
                    on_change: move |value| {
                        if let Some(w) = wizard.write().as_mut() {
                            w.custom.memory = value;
                        }
                    },
                }
                ResourceSlider {
                    label: "Storage",
                    value: custom.storage,
                    min: *STORAGE_RANGE.start(),
                    max: *STORAGE_RANGE.end(),
                    unit: " GB",
                    on_change: move |value| {
                        if let Some(w) = wizard.write().as_mut() {
                            w.custom.storage = value;
                        }
                    },
                }
            }
            FieldError { errors: errors.clone(), field: "cpu" }
            FieldError { errors: errors.clone(), field: "memory" }
            FieldError { errors: errors.clone(), field: "storage" }
        }
        p { class: "text-right text-lg", {format!("Estimated price: ${:.2}/mo", current.price())} }
        FieldError { errors, field: "plan" }
    }
}

#[component]
fn ResourceSlider(
    label: &'static str,
    value: u32,
    min: u32,
    max: u32,
    unit: &'static str,
    on_change: EventHandler<u32>,
) -> Element {
    rsx! {
        Field {
            label,
            input {
                r#type: "range",
                class: "range range-sm",
                min: "{min}",
                max: "{max}",
                value: "{value}",
                oninput: move |evt| {
                    if let Ok(parsed) = evt.value().parse::<u32>() {
                        on_change.call(parsed);
                    }
                },
            }
            p { class: "text-sm", "{value}{unit}" }
        }
    }
}

#[component]
fn ReviewStep(wizard: ServerWizard, templates: Vec<OsTemplateDto>) -> Element {
    let template = wizard
        .os_template
        .as_ref()
        .and_then(|id| templates.iter().find(|t| &t.id == id))
        .map(|t| t.name.clone())
        .unwrap_or_default();
    let plan = match wizard.selected_plan() {
        Some(plan) => plan.name.clone(),
        None if wizard.is_custom() => "Custom".to_string(),
        None => String::new(),
    };
    let resources = wizard.resources().unwrap_or_default();

    rsx! {
        table {
            class: "table",
            tbody {
                tr { th { "Name" } td { "{wizard.name}" } }
                tr { th { "Node" } td { {wizard.node.clone().unwrap_or_default()} } }
                tr { th { "Operating system" } td { "{template}" } }
                tr { th { "Plan" } td { "{plan}" } }
                tr { th { "Resources" } td { "{resources.cpu} vCPU / {resources.memory} GB / {resources.storage} GB" } }
                tr { th { "Price" } td { {format!("${:.2}/mo", wizard.price())} } }
            }
        }
    }
}
