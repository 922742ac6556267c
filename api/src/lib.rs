//! Client-side API layer for the wallet web app.
//!
//! The wallet backend exposes a small authenticated REST surface; this crate
//! holds the wire types and the read operations the UI needs, plus access to
//! the values the login flow persists on the client (auth token, telegram id,
//! deposit address).

pub mod client_store;
pub mod config;
pub mod deposit;

use deposit::DepositApiError;
use deposit::DepositTransaction;

pub type ApiError = anyhow::Error;

/// Fetches the current user's deposit history.
///
/// Issues a single `GET /wallet/deposit/` against the configured backend,
/// authenticated with the bearer token from client storage. A success body
/// that is not a JSON array is treated as an empty history, not an error.
pub async fn deposit_history() -> Result<Vec<DepositTransaction>, ApiError> {
    let token = client_store::auth_token().ok_or(DepositApiError::MissingToken)?;

    let url = format!("{}/wallet/deposit/", config::api_base_url());
    let body: serde_json::Value = reqwest::Client::new()
        .get(&url)
        .header("Authorization", format!("Bearer {token}"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let history = deposit::coerce_history(body)?;
    dioxus_logger::tracing::info!("fetched {} deposit transactions", history.len());
    Ok(history)
}
