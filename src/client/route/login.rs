use dioxus::prelude::*;

use crate::client::{
    api::mock::seed::{ADMIN_EMAIL, ADMIN_PASSWORD},
    component::{Field, FieldError, Page},
    config::{ApiMode, Config},
    constant::SITE_NAME,
    model::session::SessionState,
    router::Route,
    service::validation::{FieldErrors, LoginForm},
    store::SessionStore,
};

#[component]
pub fn Login() -> Element {
    let session_state = use_context::<Signal<SessionState>>();
    let session = use_context::<SessionStore>();
    let config = use_context::<Config>();
    let nav = navigator();

    let mut form = use_signal(LoginForm::default);
    let mut errors = use_signal(FieldErrors::new);

    // Logged-in users have nothing to do here
    use_effect(move || {
        let state = session_state();
        if !state.is_loading && state.is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let current = form();
        let validation = current.validate();
        if !validation.is_empty() {
            errors.set(validation);
            return;
        }
        errors.set(FieldErrors::new());

        let session = session.clone();
        spawn(async move {
            if session.login(&current.email, &current.password).await.is_ok() {
                nav.replace(Route::Dashboard {});
            }
        });
    };

    let state = session_state();
    let is_mock = config.api_mode == ApiMode::Mock;

    rsx! {
        Title { "Login | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 items-center justify-center w-full h-full lg:pl-4",
            div {
                class: "card bg-base-200 w-full max-w-sm",
                form {
                    class: "card-body",
                    onsubmit: submit,
                    h1 { class: "card-title text-2xl", "Sign in to {SITE_NAME}" }
                    Field {
                        label: "Email",
                        input {
                            r#type: "email",
                            class: "input w-full",
                            value: form().email,
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                        FieldError { errors: errors(), field: "email" }
                    }
                    Field {
                        label: "Password",
                        input {
                            r#type: "password",
                            class: "input w-full",
                            value: form().password,
                            oninput: move |evt| form.write().password = evt.value(),
                        }
                        FieldError { errors: errors(), field: "password" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary mt-4",
                        disabled: state.is_loading,
                        if state.is_loading {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Login"
                    }
                    if is_mock {
                        p {
                            class: "text-xs opacity-60 mt-2",
                            "Demo mode: sign in with {ADMIN_EMAIL} / {ADMIN_PASSWORD}"
                        }
                    }
                }
            }
        }
    }
}
