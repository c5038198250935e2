mod client;
mod model;

use client::App;

fn main() {
    #[cfg(feature = "desktop")]
    dotenvy::dotenv().ok();

    dioxus::launch(App);
}
