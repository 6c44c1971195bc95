use dioxus::prelude::*;

use super::wallet_connection::{use_wallet_connection, WalletConnection};
use crate::config::{BRAND, BRAND_HREF, DARK, PAGES};
use crate::wallet::WalletError;

#[component]
pub fn NavBar(on_error: Option<EventHandler<WalletError>>) -> Element {
    let connection = use_wallet_connection(on_error);
    let menu_open = use_signal(|| false);
    nav_bar_view(connection, menu_open)
}

fn nav_bar_view(connection: WalletConnection, mut menu_open: Signal<bool>) -> Element {
    let (label, available) = {
        let state = connection.state.read();
        (state.label(), state.provider_available)
    };
    let on_toggle = move |_: Event<MouseData>| {
        spawn(connection.clone().toggle());
    };

    let expanded = menu_open();
    let menu_class = if expanded { "nav-menu open" } else { "nav-menu" };

    rsx! {
        nav {
            class: "app-bar",
            style: DARK.css_vars(),
            "data-wallet-provider": "{available}",
            div { class: "page-container",
                // Wide layout brand
                div { class: "nav-logo wide-only",
                    span { class: "logo-icon", "aria-hidden": "true", "◆" }
                    a { class: "logo-text", href: BRAND_HREF, "{BRAND}" }
                }

                // Narrow layout menu
                div { class: "nav-menu-anchor narrow-only",
                    button {
                        class: "icon-button",
                        "aria-label": "open navigation menu",
                        "aria-controls": "menu-appbar",
                        "aria-haspopup": "true",
                        "aria-expanded": "{expanded}",
                        onclick: move |_| menu_open.set(true),
                        span { class: "menu-icon", "☰" }
                    }
                    if expanded {
                        div {
                            class: "nav-menu-backdrop",
                            onclick: move |_| menu_open.set(false),
                        }
                    }
                    ul { id: "menu-appbar", class: menu_class, role: "menu",
                        for page in PAGES {
                            li {
                                key: "{page.label}",
                                class: "nav-menu-item",
                                role: "menuitem",
                                onclick: move |_| menu_open.set(false),
                                "{page.label}"
                            }
                        }
                    }
                }
                a { class: "logo-text narrow-only grow", href: BRAND_HREF, "{BRAND}" }

                div { class: "nav-links wide-only",
                    for page in PAGES {
                        button {
                            key: "{page.label}",
                            class: "nav-link",
                            onclick: move |_| menu_open.set(false),
                            "{page.label}"
                        }
                    }
                }

                button { class: "sign-in", onclick: on_toggle, "{label}" }
            }
        }
    }
}
