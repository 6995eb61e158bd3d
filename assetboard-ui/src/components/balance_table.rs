//! Balance Table Component
//!
//! One row per asset from the latest feed frame.

use leptos::*;

use crate::state::{format_amount, Balance, DashboardState};

/// Row identity for `<For>`. Amounts are part of the key so a row is
/// rebuilt when a frame changes them for an existing asset.
pub fn row_key(balance: &Balance) -> (String, u64, u64) {
    (balance.asset.clone(), balance.free.to_bits(), balance.locked.to_bits())
}

#[component]
pub fn BalanceTable() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <table class="w-full text-sm">
            <thead>
                <tr class="border-b border-gray-700 text-gray-400">
                    <th class="text-left py-2">"Asset"</th>
                    <th class="text-right py-2">"Free"</th>
                    <th class="text-right py-2">"Locked"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || state.balances.get()
                    key=row_key
                    children=move |balance: Balance| {
                        view! {
                            <tr class="border-b border-gray-700 last:border-0">
                                <td class="py-2 font-medium">{balance.asset}</td>
                                <td class="py-2 text-right tabular-nums">{format_amount(balance.free)}</td>
                                <td class="py-2 text-right tabular-nums">{format_amount(balance.locked)}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(asset: &str, free: f64, locked: f64) -> Balance {
        Balance {
            asset: asset.to_string(),
            free,
            locked,
        }
    }

    #[test]
    fn test_row_key_changes_with_amounts() {
        let before = balance("BTC", 1.0, 0.0);

        assert_ne!(row_key(&before), row_key(&balance("BTC", 2.0, 0.0)));
        assert_ne!(row_key(&before), row_key(&balance("BTC", 1.0, 0.5)));
        assert_eq!(row_key(&before), row_key(&balance("BTC", 1.0, 0.0)));
    }

    #[test]
    fn test_row_key_distinguishes_assets() {
        assert_ne!(row_key(&balance("BTC", 1.0, 0.0)), row_key(&balance("ETH", 1.0, 0.0)));
    }
}
