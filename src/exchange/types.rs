//! Exchange Response Types
//!
//! The exchange encodes amounts and prices as decimal strings; these types
//! accept either strings or plain JSON numbers.

use serde::{Deserialize, Deserializer};

/// `GET /api/v3/account`
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub balances: Vec<RawBalance>,
}

/// Unvalued balance as reported by the exchange
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawBalance {
    pub asset: String,
    #[serde(deserialize_with = "decimal")]
    pub free: f64,
    #[serde(deserialize_with = "decimal")]
    pub locked: f64,
}

impl RawBalance {
    pub fn new(asset: impl Into<String>, free: f64, locked: f64) -> Self {
        Self {
            asset: asset.into(),
            free,
            locked,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.free == 0.0 && self.locked == 0.0
    }
}

/// One entry of `GET /api/v3/ticker/price`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    #[serde(deserialize_with = "decimal")]
    pub price: f64,
}

/// `POST /api/v3/userDataStream`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenKeyResponse {
    pub listen_key: String,
}

fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Text(String),
        Number(f64),
    }

    match Decimal::deserialize(deserializer)? {
        Decimal::Number(n) => Ok(n),
        Decimal::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_with_string_amounts() {
        let json = r#"{
            "canTrade": true,
            "balances": [
                {"asset": "BTC", "free": "0.5", "locked": "0.1"},
                {"asset": "USDT", "free": 120, "locked": "0"}
            ]
        }"#;
        let account: AccountInfo = serde_json::from_str(json).unwrap();

        assert_eq!(account.balances.len(), 2);
        assert_eq!(account.balances[0], RawBalance::new("BTC", 0.5, 0.1));
        assert_eq!(account.balances[1], RawBalance::new("USDT", 120.0, 0.0));
    }

    #[test]
    fn test_bad_decimal_rejected() {
        let json = r#"{"symbol": "BTCUSDT", "price": "abc"}"#;
        assert!(serde_json::from_str::<TickerPrice>(json).is_err());
    }

    #[test]
    fn test_listen_key() {
        let json = r#"{"listenKey": "pqia91ma19a5s61cv6a81va65sdf19v8a65a1a5s61cv6a81va65sdf19v8a65a1"}"#;
        let response: ListenKeyResponse = serde_json::from_str(json).unwrap();
        assert!(response.listen_key.starts_with("pqia91"));
    }

    #[test]
    fn test_empty_balance() {
        assert!(RawBalance::new("DOGE", 0.0, 0.0).is_empty());
        assert!(!RawBalance::new("DOGE", 0.0, 1.0).is_empty());
    }
}
