//! Defines the reactive auth context shared by every screen.

use dioxus::prelude::*;

/// Values supplied by the upstream Telegram login flow.
///
/// This struct holds `Signal`s so that views subscribe to the values and
/// re-render when either one becomes available. Both are read-only as far as
/// the screens are concerned; only the application root writes them.
#[derive(Clone, Copy)]
pub struct AuthState {
    /// The logged-in user's telegram id. `None` until the login flow has run.
    pub telegram_id: Signal<Option<String>>,
    /// The user's TRX deposit address. `None` until assigned by the backend.
    pub deposit_address: Signal<Option<String>>,
}
