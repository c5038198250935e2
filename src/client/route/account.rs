use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Field, FieldError, Page},
    constant::SITE_NAME,
    model::session::SessionState,
    service::validation::{FieldErrors, ProfileForm},
    store::SessionStore,
};

#[component]
pub fn Account() -> Element {
    let session_state = use_context::<Signal<SessionState>>();
    let session = use_context::<SessionStore>();

    let mut form = use_signal(|| {
        session_state
            .peek()
            .identity
            .as_ref()
            .map(ProfileForm::from_user)
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::new);
    let mut is_saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(user) = session_state.peek().identity.clone() else {
            return;
        };
        let update = match form().to_update(&user) {
            Ok(update) => update,
            Err(form_errors) => {
                errors.set(form_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());

        let session = session.clone();
        is_saving.set(true);
        spawn(async move {
            if let Ok(updated) = session.update_profile(&update).await {
                form.set(ProfileForm::from_user(&updated));
            }
            is_saving.set(false);
        });
    };

    let state = session_state();
    let Some(user) = state.identity else {
        return rsx! { LoadingPage {} };
    };
    let current = form();

    rsx! {
        Title { "Account | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center gap-6",
            div {
                class: "w-full max-w-2xl flex flex-col gap-6",
                h1 { class: "text-2xl font-bold", "Account" }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body",
                        h2 { class: "card-title", {user.display_name()} }
                        p { class: "opacity-70", "{user.email}" }
                        p {
                            class: "text-sm opacity-60",
                            {format!("Role: {:?} · Member since {}", user.role, user.created_at.format("%Y-%m-%d"))}
                        }
                    }
                }
                form {
                    class: "card bg-base-200",
                    onsubmit: submit,
                    div {
                        class: "card-body",
                        h2 { class: "card-title", "Profile" }
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
                        h2 { class: "card-title mt-4", "Change Password" }
                        Field {
                            label: "Current password",
                            input {
                                r#type: "password",
                                class: "input w-full",
                                value: current.current_password.clone(),
                                oninput: move |evt| form.write().current_password = evt.value(),
                            }
                            FieldError { errors: errors(), field: "current_password" }
                        }
                        Field {
                            label: "New password",
                            input {
                                r#type: "password",
                                class: "input w-full",
                                value: current.new_password.clone(),
                                oninput: move |evt| form.write().new_password = evt.value(),
                            }
                            FieldError { errors: errors(), field: "new_password" }
                        }
                        Field {
                            label: "Confirm new password",
                            input {
                                r#type: "password",
                                class: "input w-full",
                                value: current.confirm_password.clone(),
                                oninput: move |evt| form.write().confirm_password = evt.value(),
                            }
                            FieldError { errors: errors(), field: "confirm_password" }
                        }
                        div {
                            class: "card-actions justify-end mt-4",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: is_saving(),
                                if is_saving() {
                                    span { class: "loading loading-spinner loading-sm mr-2" }
                                }
                                "Save Changes"
                            }
                        }
                    }
                }
            }
        }
    }
}
