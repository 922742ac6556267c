//! Wire types for the deposit history endpoint.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// One recorded deposit, as returned by `GET /wallet/deposit/`.
///
/// Field names match the backend's JSON; `timestamp` is RFC 3339.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositTransaction {
    pub tx_id: String,
    pub block_number: u64,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl DepositTransaction {
    /// Timestamp in the `dd/MM/yyyy HH:mm` form the history table shows.
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%d/%m/%Y %H:%M").to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DepositApiError {
    #[error("no auth token found in client storage")]
    MissingToken,
    #[error("unexpected deposit history shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Interprets a deposit history response body.
///
/// The backend answers a JSON array on the happy path. Anything else that
/// still parsed as JSON (an object, null, a bare string) means "no data",
/// so it coerces to an empty list rather than an error.
pub fn coerce_history(body: serde_json::Value) -> Result<Vec<DepositTransaction>, DepositApiError> {
    match body {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(body)?),
        other => {
            dioxus_logger::tracing::debug!(
                "deposit history body is not a list ({}); treating as empty",
                json_kind(&other)
            );
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn array_body_parses_into_transactions() {
        let body = json!([{
            "tx_id": "tx1",
            "block_number": 100,
            "amount": 5.0,
            "timestamp": "2024-01-01T10:00:00Z"
        }]);

        let history = coerce_history(body).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].tx_id, "tx1");
        assert_eq!(history[0].block_number, 100);
        assert_eq!(history[0].amount, 5.0);
    }

    #[test]
    fn non_array_body_coerces_to_empty() {
        let history = coerce_history(json!({"detail": "not found"})).unwrap();
        assert!(history.is_empty());

        let history = coerce_history(serde_json::Value::Null).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn malformed_array_element_is_a_decode_error() {
        let body = json!([{"tx_id": "tx1"}]);
        assert!(matches!(
            coerce_history(body),
            Err(DepositApiError::Decode(_))
        ));
    }

    #[test]
    fn timestamp_display_uses_day_month_year() {
        let tx: DepositTransaction = serde_json::from_value(json!({
            "tx_id": "tx1",
            "block_number": 100,
            "amount": 5.0,
            "timestamp": "2024-01-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(tx.timestamp_display(), "01/01/2024 10:00");
    }

    #[test]
    fn amount_renders_without_trailing_zeros() {
        // The table shows the amount verbatim via Display, like the backend
        // sent it: 5.0 renders as "5", fractional values keep their digits.
        assert_eq!(format!("{}", 5.0_f64), "5");
        assert_eq!(format!("{}", 12.345_f64), "12.345");
    }
}
