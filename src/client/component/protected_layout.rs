use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Header, Sidebar, ToastHost},
    model::session::{Capability, SessionState},
    router::Route,
    service::guard::{evaluate, GuardDecision},
};

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { required: Capability::Authenticated }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { required: Capability::AdminOnly }
    }
}

#[component]
pub fn ProtectedLayout(required: Capability) -> Element {
    let session_state = use_context::<Signal<SessionState>>();
    let nav = navigator();

    let decision = evaluate(&session_state(), required);
    let redirect = match &decision {
        GuardDecision::Redirect(route) => Some(route.clone()),
        _ => None,
    };

    // Redirect once the session has been read
    use_effect(use_reactive!(|redirect| {
        if let Some(route) = redirect {
            nav.replace(route);
        }
    }));

    rsx! {
        Header {  }
        Sidebar {  }
        match decision {
            GuardDecision::Render => rsx! { Outlet::<Route> {} },
            // Render nothing useful while redirecting
            GuardDecision::Pending | GuardDecision::Redirect(_) => rsx! { LoadingPage {  } },
        }
        ToastHost {  }
    }
}
