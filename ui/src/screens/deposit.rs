//=============================================================================
// File: src/screens/deposit.rs
//=============================================================================
use api::deposit::DepositTransaction;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::components::pico::CopyButton;
use crate::hooks::use_auth::use_auth;

/// Shown when the deposit fetch fails; the underlying error is only logged.
const FETCH_ERROR_MESSAGE: &str =
    "Failed to fetch deposit information. Please try again later.";

/// What the feed may do given the auth values currently present.
#[derive(Clone, Copy, PartialEq, Debug, strum::EnumIs)]
pub(crate) enum FeedGate {
    AwaitingTelegramId,
    AwaitingAddress,
    Ready,
}

/// The gating half of the feed's state machine. The history request is only
/// issued once both values are present; until then the screen shows which
/// one it is waiting for.
pub(crate) fn feed_gate(telegram_id: Option<&str>, address: Option<&str>) -> FeedGate {
    match (telegram_id, address) {
        (None, _) => FeedGate::AwaitingTelegramId,
        (Some(_), None) => FeedGate::AwaitingAddress,
        (Some(_), Some(_)) => FeedGate::Ready,
    }
}

#[allow(non_snake_case)]
#[component]
pub fn DepositScreen() -> Element {
    let auth = use_auth();

    use_effect(move || {
        let gate = feed_gate(
            auth.telegram_id.read().as_deref(),
            auth.deposit_address.read().as_deref(),
        );
        match gate {
            FeedGate::Ready => {
                dioxus_logger::tracing::info!("telegram id and address are both available");
            }
            FeedGate::AwaitingTelegramId => {
                dioxus_logger::tracing::debug!("waiting for telegram id");
            }
            FeedGate::AwaitingAddress => {
                dioxus_logger::tracing::debug!("waiting for deposit address");
            }
        }
    });

    // The closure reads both auth signals, so the resource restarts from the
    // top whenever either changes. While the gate is closed no request is
    // issued at all.
    let deposits = use_resource(move || async move {
        let gate = feed_gate(
            auth.telegram_id.read().as_deref(),
            auth.deposit_address.read().as_deref(),
        );
        if !gate.is_ready() {
            return Ok(None);
        }

        let result = api::deposit_history().await;
        if let Err(e) = &result {
            dioxus_logger::tracing::error!("failed to fetch deposit history: {e:#}");
        }
        result.map(Some)
    });

    rsx! {
        match &*deposits.read() {
            Some(Ok(Some(transactions))) => rsx! {
                AddressPanel {
                    address: auth.deposit_address.read().clone(),
                }
                DepositHistory {
                    transactions: transactions.clone(),
                }
            },
            Some(Ok(None)) => rsx! {
                Card {
                    div {
                        style: "padding: 2rem;",
                        if auth.telegram_id.read().is_some() {
                            p { "Loading address..." }
                        } else {
                            p { "Waiting for Telegram ID..." }
                        }
                    }
                }
            },
            Some(Err(_)) => rsx! {
                Card {
                    p {
                        style: "color: var(--pico-del-color); margin: 0;",
                        "{FETCH_ERROR_MESSAGE}"
                    }
                }
            },
            None => rsx! {
                Card {
                    p { "Loading..." }
                    progress {}
                }
            },
        }
    }
}

/// The deposit address block with its copy affordance.
#[component]
fn AddressPanel(address: Option<String>) -> Element {
    let shown = address
        .clone()
        .unwrap_or_else(|| "Loading address...".to_string());

    rsx! {
        Card {
            h2 { "Deposit TRX" }
            p { "Send TRX to the address below to make a deposit." }
            div {
                style: "background-color: var(--pico-muted-background-color); padding: 1rem; border-radius: var(--pico-border-radius); word-break: break-all;",
                code { "{shown}" }
            }
            div {
                style: "margin-top: 1rem;",
                CopyButton {
                    text_to_copy: address.clone().unwrap_or_default(),
                    label: "Copy Address",
                    copied_label: "Address Copied",
                    disabled: address.is_none(),
                }
            }
            p {
                style: "font-size: 0.75rem; color: var(--pico-muted-color); margin-top: 1rem;",
                "Your deposit will be automatically detected and reflected in your account."
            }
        }
    }
}

/// A self-contained component for rendering a single row of the history table.
#[component]
fn DepositRow(transaction: DepositTransaction) -> Element {
    rsx! {
        tr {
            td { "{transaction.timestamp_display()}" }
            td { "{transaction.amount}" }
            td {
                code { "{transaction.tx_id}" }
            }
        }
    }
}

#[component]
fn DepositHistory(transactions: Vec<DepositTransaction>) -> Element {
    if transactions.is_empty() {
        return rsx! {
            EmptyState {
                title: "No deposit history found.",
            }
        };
    }

    rsx! {
        Card {
            h3 { "Deposit History" }
            div {
                style: "max-height: 16rem; overflow-y: auto;",
                table {
                    thead {
                        tr {
                            th { "Date" }
                            th { "Amount (TRX)" }
                            th { "Transaction ID" }
                        }
                    }
                    tbody {
                        {transactions.iter().map(|tx| {
                            rsx! {
                                DepositRow {
                                    key: "{tx.tx_id}",
                                    transaction: tx.clone(),
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_requires_telegram_id_first() {
        assert_eq!(feed_gate(None, None), FeedGate::AwaitingTelegramId);
        assert_eq!(
            feed_gate(None, Some("TWd4WrZ9wn84f5x1hZhL4DHvk738ns5jwb")),
            FeedGate::AwaitingTelegramId
        );
    }

    #[test]
    fn gate_waits_for_address_once_identified() {
        assert_eq!(feed_gate(Some("12345"), None), FeedGate::AwaitingAddress);
    }

    #[test]
    fn gate_opens_when_both_present() {
        let gate = feed_gate(
            Some("12345"),
            Some("TWd4WrZ9wn84f5x1hZhL4DHvk738ns5jwb"),
        );
        assert!(gate.is_ready());
    }

    #[test]
    fn closed_gate_never_fetches() {
        // The resource closure returns before touching the network unless the
        // gate is ready; these are the only two closed shapes.
        assert!(!feed_gate(None, None).is_ready());
        assert!(!feed_gate(Some("12345"), None).is_ready());
    }
}
