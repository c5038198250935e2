use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ResourceGateway, UserApi},
        component::{
            page::{ErrorPage, LoadingPage},
            ConfirmationModal, Field, FieldError, Modal, Page,
        },
        constant::SITE_NAME,
        model::{fetch::Fetch, session::SessionState},
        service::validation::{FieldErrors, UserForm},
        store::Notifier,
    },
    model::user::{Role, UserDto},
};

#[component]
pub fn Users() -> Element {
    let gateway = use_context::<ResourceGateway>();
    let notifier = use_context::<Notifier>();
    let session_state = use_context::<Signal<SessionState>>();

    let mut users = use_signal(Fetch::<Vec<UserDto>>::default);
    let mut search = use_signal(String::new);
    let mut show_add_modal = use_signal(|| false);
    let mut to_delete = use_signal(|| None::<UserDto>);
    let mut show_delete_modal = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    let future = {
        let gateway = gateway.clone();
        use_resource(move || {
            let gateway = gateway.clone();
            async move { gateway.get_users().await }
        })
    };

    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch users: {}", err);
            }
            users.set(result.clone().into());
        }
    });

    let delete_user = move |_| {
        let Some(user) = to_delete() else {
            return;
        };
        let gateway = gateway.clone();
        let notifier = notifier.clone();
        is_deleting.set(true);
        spawn(async move {
            if gateway.delete_user(&user.id).await.is_ok() {
                if let Some(list) = users.write().data_mut() {
                    list.retain(|u| u.id != user.id);
                }
                notifier.success("User deleted successfully");
                show_delete_modal.set(false);
            }
            is_deleting.set(false);
        });
    };

    let current_user_id = session_state().user_id().map(str::to_string);
    let delete_message = to_delete()
        .map(|u| format!("Delete the account of {}? This cannot be undone.", u.email))
        .unwrap_or_default();

    rsx! {
        Title { "Users | {SITE_NAME}" }
        match users() {
            Fetch::Loading => rsx! { LoadingPage {} },
            Fetch::Error(err) => rsx! { ErrorPage { status: err.status(), message: err.to_string() } },
            Fetch::Fetched(list) => {
                let term = search().trim().to_lowercase();
                let filtered: Vec<UserDto> = list
                    .into_iter()
                    .filter(|u| {
                        term.is_empty()
                            || u.name.to_lowercase().contains(&term)
                            || u.email.to_lowercase().contains(&term)
                    })
                    .collect();

                rsx! {
                    Page {
                        class: "flex flex-col gap-6",
                        div {
                            class: "flex flex-wrap items-center justify-between gap-4",
                            h1 { class: "text-2xl font-bold", "Users" }
                            div {
                                class: "flex gap-2",
                                input {
                                    class: "input",
                                    placeholder: "Search users...",
                                    value: "{search}",
                                    oninput: move |evt| search.set(evt.value()),
                                }
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| show_add_modal.set(true),
                                    "Add User"
                                }
                            }
                        }
                        div {
                            class: "overflow-x-auto card bg-base-200",
                            table {
                                class: "table w-full",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Email" }
                                        th { "Role" }
                                        th { "Created" }
                                        th { class: "text-right", "Actions" }
                                    }
                                }
                                tbody {
                                    for user in filtered {
                                        {
                                            let is_current_user = current_user_id.as_deref() == Some(user.id.as_str());
                                            let target = user.clone();
                                            rsx! {
                                                tr {
                                                    key: "{user.id}",
                                                    td {
                                                        div {
                                                            class: "flex items-center gap-2",
                                                            span { "{user.name}" }
                                                            if is_current_user {
                                                                span { class: "badge badge-sm badge-primary", "You" }
                                                            }
                                                        }
                                                    }
                                                    td { "{user.email}" }
                                                    td {
                                                        span {
                                                            class: if user.role == Role::Admin { "badge badge-sm badge-secondary" } else { "badge badge-sm badge-ghost" },
                                                            {format!("{:?}", user.role)}
                                                        }
                                                    }
                                                    td { {user.created_at.format("%Y-%m-%d").to_string()} }
                                                    td {
                                                        div {
                                                            class: "flex justify-end",
                                                            button {
                                                                class: "btn btn-sm btn-error",
                                                                disabled: is_current_user,
                                                                onclick: move |_| {
                                                                    to_delete.set(Some(target.clone()));
                                                                    show_delete_modal.set(true);
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
        }
        AddUserModal {
            show: show_add_modal,
            on_created: move |user: UserDto| {
                if let Some(list) = users.write().data_mut() {
                    list.push(user);
                }
            },
        }
        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete User",
            message: delete_message,
            confirm_text: "Delete",
            is_processing: is_deleting(),
            on_confirm: delete_user,
        }
    }
}

#[component]
fn AddUserModal(mut show: Signal<bool>, on_created: EventHandler<UserDto>) -> Element {
    let gateway = use_context::<ResourceGateway>();
    let notifier = use_context::<Notifier>();

    let mut form = use_signal(UserForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut is_submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = match form().to_create() {
            Ok(payload) => payload,
            Err(form_errors) => {
                errors.set(form_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());

        let gateway = gateway.clone();
        let notifier = notifier.clone();
        is_submitting.set(true);
        spawn(async move {
            if let Ok(user) = gateway.create_user(&payload).await {
                notifier.success("User created successfully");
                on_created.call(user);
                form.set(UserForm::default());
                show.set(false);
            }
            is_submitting.set(false);
        });
    };

    let current = form();

    rsx! {
        Modal {
            show,
            title: "Add User",
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-2",
                onsubmit: submit,
                Field {
                    label: "Name",
                    input {
                        class: "input w-full",
                        value: current.name.clone(),
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                    FieldError { errors: errors(), field: "name" }
                }
                Field {
                    label: "Email",
                    input {
                        r#type: "email",
                        class: "input w-full",
                        value: current.email.clone(),
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    FieldError { errors: errors(), field: "email" }
                }
                Field {
                    label: "Password",
                    input {
                        r#type: "password",
                        class: "input w-full",
                        value: current.password.clone(),
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                    FieldError { errors: errors(), field: "password" }
                }
                Field {
                    label: "Role",
                    select {
                        class: "select w-full",
                        onchange: move |evt| {
                            form.write().role = if evt.value() == "admin" { Role::Admin } else { Role::User };
                        },
                        option { value: "user", selected: current.role == Role::User, "User" }
                        option { value: "admin", selected: current.role == Role::Admin, "Admin" }
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_submitting(),
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        if is_submitting() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Create User"
                    }
                }
            }
        }
    }
}
