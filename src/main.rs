mod components;
mod config;
mod connection;
mod wallet;

use components::NavBar;
use wallet::{InjectedProvider, WalletHandle};

use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| WalletHandle::new(InjectedProvider::new()));

    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        NavBar {}
    }
}
