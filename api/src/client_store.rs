//! Read-only access to values the login flow persists on the client.
//!
//! The Telegram login flow writes the auth token, the telegram id and the
//! deposit address before this app is ever opened; we only read them. On web
//! builds they live in the browser's localStorage. Native builds read the
//! process environment instead (`TRX_WALLET_TOKEN` etc.), which is how the
//! desktop shell is fed during development.

pub const TOKEN_KEY: &str = "token";
pub const TELEGRAM_ID_KEY: &str = "telegram_id";
pub const DEPOSIT_ADDRESS_KEY: &str = "deposit_address";

pub fn auth_token() -> Option<String> {
    read(TOKEN_KEY)
}

pub fn telegram_id() -> Option<String> {
    read(TELEGRAM_ID_KEY)
}

pub fn deposit_address() -> Option<String> {
    read(DEPOSIT_ADDRESS_KEY)
}

#[cfg(target_arch = "wasm32")]
fn read(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?.filter(|value| !value.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn read(key: &str) -> Option<String> {
    std::env::var(format!("TRX_WALLET_{}", key.to_uppercase()))
        .ok()
        .filter(|value| !value.is_empty())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn empty_values_count_as_absent() {
        std::env::set_var("TRX_WALLET_TOKEN", "");
        assert_eq!(auth_token(), None);

        std::env::set_var("TRX_WALLET_TOKEN", "secret");
        assert_eq!(auth_token(), Some("secret".to_string()));
        std::env::remove_var("TRX_WALLET_TOKEN");
    }
}
