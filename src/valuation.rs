//! Balance Valuation
//!
//! Converts raw exchange balances into amounts of the quote asset.

use std::collections::HashMap;

use crate::balance::Balance;
use crate::exchange::{RawBalance, TickerPrice};

/// Index ticker prices by symbol
pub fn price_index(prices: &[TickerPrice]) -> HashMap<&str, f64> {
    prices.iter().map(|t| (t.symbol.as_str(), t.price)).collect()
}

/// Value every non-empty balance in `quote`.
///
/// The quote asset itself passes through unchanged. Other assets are
/// converted with the `{asset}{quote}` price; assets without such a market
/// are left out. Input order is kept.
pub fn value_balances(balances: &[RawBalance], prices: &[TickerPrice], quote: &str) -> Vec<Balance> {
    let index = price_index(prices);

    balances
        .iter()
        .filter(|b| !b.is_empty())
        .filter_map(|b| {
            if b.asset == quote {
                return Some(Balance::new(&b.asset, b.free, b.locked));
            }

            let symbol = format!("{}{}", b.asset, quote);
            match index.get(symbol.as_str()) {
                Some(price) => Some(Balance::new(&b.asset, b.free * price, b.locked * price)),
                None => {
                    tracing::trace!(asset = %b.asset, symbol = %symbol, "No market for asset, skipped");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(symbol: &str, price: f64) -> TickerPrice {
        TickerPrice {
            symbol: symbol.to_string(),
            price,
        }
    }

    #[test]
    fn test_converts_with_quote_market() {
        let balances = vec![RawBalance::new("BTC", 0.5, 0.25)];
        let prices = vec![ticker("BTCUSDT", 40000.0), ticker("ETHUSDT", 2000.0)];

        let valued = value_balances(&balances, &prices, "USDT");
        assert_eq!(valued, vec![Balance::new("BTC", 20000.0, 10000.0)]);
    }

    #[test]
    fn test_quote_asset_passes_through() {
        let balances = vec![RawBalance::new("USDT", 125.5, 4.5)];
        let valued = value_balances(&balances, &[], "USDT");
        assert_eq!(valued, vec![Balance::new("USDT", 125.5, 4.5)]);
    }

    #[test]
    fn test_skips_empty_and_unpriced() {
        let balances = vec![
            RawBalance::new("DOGE", 0.0, 0.0),
            RawBalance::new("OBSCURE", 10.0, 0.0),
            RawBalance::new("ETH", 1.0, 0.0),
        ];
        let prices = vec![ticker("ETHUSDT", 2000.0), ticker("DOGEUSDT", 0.1)];

        let valued = value_balances(&balances, &prices, "USDT");
        assert_eq!(valued, vec![Balance::new("ETH", 2000.0, 0.0)]);
    }

    #[test]
    fn test_keeps_input_order() {
        let balances = vec![
            RawBalance::new("ETH", 1.0, 0.0),
            RawBalance::new("USDT", 5.0, 0.0),
            RawBalance::new("BTC", 1.0, 0.0),
        ];
        let prices = vec![ticker("BTCUSDT", 3.0), ticker("ETHUSDT", 2.0)];

        let assets: Vec<_> = value_balances(&balances, &prices, "USDT")
            .into_iter()
            .map(|b| b.asset)
            .collect();
        assert_eq!(assets, vec!["ETH", "USDT", "BTC"]);
    }

    #[test]
    fn test_locked_only_balance_is_kept() {
        let balances = vec![RawBalance::new("BTC", 0.0, 1.0)];
        let prices = vec![ticker("BTCUSDT", 10.0)];
        assert_eq!(
            value_balances(&balances, &prices, "USDT"),
            vec![Balance::new("BTC", 0.0, 10.0)]
        );
    }
}
