//! Backend endpoint configuration.

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Base URL of the wallet backend, without a trailing slash.
///
/// Native builds honor the `TRX_WALLET_API_URL` environment variable at
/// runtime; wasm builds can only be configured at compile time through the
/// same variable.
pub fn api_base_url() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(url) = std::env::var("TRX_WALLET_API_URL") {
        if !url.is_empty() {
            return url.trim_end_matches('/').to_string();
        }
    }

    option_env!("TRX_WALLET_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }
}
