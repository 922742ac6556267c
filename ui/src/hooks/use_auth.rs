use dioxus::prelude::*;

use crate::app_state::AuthState;

/// Returns the auth context installed at the application root.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
