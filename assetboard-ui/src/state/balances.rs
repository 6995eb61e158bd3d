//! Balance Model
//!
//! Records pushed by the relay and the frame decoder.

use thiserror::Error;

/// Holding of one asset, valued in the quote asset
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Balance {
    pub asset: String,
    pub free: f64,
    pub locked: f64,
}

/// Error frame the relay sends when a refresh fails
#[derive(Debug, serde::Deserialize)]
struct RelayError {
    error: String,
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Relay reported an error: {0}")]
    Relay(String),

    #[error("Malformed balance frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode one text frame into the full balance set
pub fn parse_frame(text: &str) -> Result<Vec<Balance>, FrameError> {
    match serde_json::from_str::<Vec<Balance>>(text) {
        Ok(balances) => Ok(balances),
        Err(e) => match serde_json::from_str::<RelayError>(text) {
            Ok(relay) => Err(FrameError::Relay(relay.error)),
            Err(_) => Err(FrameError::Malformed(e)),
        },
    }
}

/// Fixed four-decimal display used for every amount
pub fn format_amount(value: f64) -> String {
    format!("{:.4}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame() {
        let balances =
            parse_frame(r#"[{"asset":"BTC","free":0.5,"locked":0},{"asset":"ETH","free":2,"locked":1.25}]"#)
                .unwrap();

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].asset, "BTC");
        assert_eq!(balances[0].free, 0.5);
        assert_eq!(balances[1].locked, 1.25);
    }

    #[test]
    fn test_parse_empty_frame() {
        assert!(parse_frame("[]").unwrap().is_empty());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let balances = parse_frame(r#"[{"asset":"BTC","free":1,"locked":0,"usd":42}]"#).unwrap();
        assert_eq!(balances[0].asset, "BTC");
    }

    #[test]
    fn test_missing_field_rejected() {
        assert!(matches!(
            parse_frame(r#"[{"asset":"BTC","free":1}]"#),
            Err(FrameError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_json_rejected() {
        assert!(matches!(parse_frame("not json"), Err(FrameError::Malformed(_))));
    }

    #[test]
    fn test_relay_error_frame() {
        match parse_frame(r#"{"error":"Request timed out"}"#) {
            Err(FrameError::Relay(message)) => assert_eq!(message, "Request timed out"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1.0), "1.0000");
        assert_eq!(format_amount(0.0), "0.0000");
        assert_eq!(format_amount(1234.56789), "1234.5679");
    }
}
