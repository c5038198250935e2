use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME, model::session::SessionState, router::Route, store::SessionStore,
};

#[component]
pub fn Header() -> Element {
    let session_state = use_context::<Signal<SessionState>>();
    let session = use_context::<SessionStore>();
    let nav = navigator();

    let state = session_state();
    let display_name = state
        .identity
        .as_ref()
        .map(|user| user.display_name().to_string());

    let logout = move |_| {
        let session = session.clone();
        spawn(async move {
            session.logout().await;
            nav.replace(Route::Login {});
        });
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Dashboard {},
                p {
                    class: "md:text-xl font-semibold",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(name) = display_name {
                Link {
                    to: Route::Account {},
                    class: "btn btn-ghost",
                    "{name}"
                }
                button {
                    class: "btn btn-outline",
                    disabled: state.is_loading,
                    onclick: logout,
                    "Logout"
                }
            }
        }
    })
}

#[component]
fn NavItem(to: Route, label: &'static str) -> Element {
    rsx!(
        li {
            Link { to, active_class: "menu-active", "{label}" }
        }
    )
}

/// Side navigation. Admin entries only show for admins.
#[component]
pub fn Sidebar() -> Element {
    let session_state = use_context::<Signal<SessionState>>();
    let is_admin = session_state().is_admin();

    rsx!(
        aside {
            class: "hidden lg:block fixed top-20 left-0 w-60 h-full bg-base-200 z-10",
            ul {
                class: "menu w-full",
                li { class: "menu-title", "General" }
                NavItem { to: Route::Dashboard {}, label: "Dashboard" }
                NavItem { to: Route::Servers {}, label: "Servers" }
                NavItem { to: Route::Billing {}, label: "Billing" }
                if is_admin {
                    li { class: "menu-title", "Administration" }
                    NavItem { to: Route::Admin {}, label: "Admin" }
                    NavItem { to: Route::Users {}, label: "Users" }
                    NavItem { to: Route::Nodes {}, label: "Nodes" }
                    NavItem { to: Route::Statistics {}, label: "Statistics" }
                }
                li { class: "menu-title", "Account" }
                NavItem { to: Route::Account {}, label: "Account" }
                NavItem { to: Route::Settings {}, label: "Settings" }
            }
        }
    )
}
