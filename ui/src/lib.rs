// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

pub use app_state::AuthState;

use components::pico::Container;
use screens::deposit::DepositScreen;

const PICO_CSS_URL: &str =
    "https://cdn.jsdelivr.net/npm/@picocss/pico@2.0.6/css/pico.cyan.min.css";

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    .app-header h1 {
        margin: 0;
        font-size: 1.5rem;
    }

    .content {
        max-width: 28rem;
        margin: 0 auto;
    }

    .content article {
        text-align: center;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS_URL,
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // The login flow owns these values; we mirror them into signals so the
    // deposit screen re-renders (and re-fetches) the moment they appear.
    let telegram_id = use_signal(|| None);
    let deposit_address = use_signal(|| None);
    let mut auth = use_context_provider(|| AuthState {
        telegram_id,
        deposit_address,
    });

    use_effect(move || {
        if auth.telegram_id.peek().is_none() {
            auth.telegram_id.set(api::client_store::telegram_id());
        }
        if auth.deposit_address.peek().is_none() {
            auth.deposit_address.set(api::client_store::deposit_address());
        }
    });

    rsx! {
        Container {
            header {
                class: "app-header",
                nav {
                    ul {
                        li {
                            h1 { "TRX Wallet" }
                        }
                    }
                }
            }
            div {
                class: "content",
                DepositScreen {}
            }
        }
    }
}
