use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    Account, Admin, Billing, Dashboard, Login, NewServer, Nodes, NotFound, Servers, Settings,
    Statistics, Users,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login")]
    Login {},
    #[end_layout]

    #[redirect("/", || Route::Dashboard {})]

    #[layout(RequiresLoggedIn)]
    #[route("/dashboard")]
    Dashboard {},

    #[route("/servers")]
    Servers {},

    #[route("/servers/new")]
    NewServer {},

    #[route("/billing")]
    Billing {},

    #[route("/settings")]
    Settings {},

    #[route("/account")]
    Account {},
    #[end_layout]

    #[layout(RequiresAdmin)]
    #[route("/admin")]
    Admin {},

    #[route("/users")]
    Users {},

    #[route("/nodes")]
    Nodes {},

    #[route("/statistics")]
    Statistics {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
