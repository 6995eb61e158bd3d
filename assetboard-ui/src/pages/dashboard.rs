//! Dashboard Page
//!
//! Overview with headline cards and the live asset balance table.

use leptos::*;

use crate::components::{
    BalanceTable, Card, CardHeader, DateRangePicker, SummaryCard, SummaryMetric, TabTrigger,
    TabsList,
};
use crate::config;
use crate::state::{open_balance_feed, provide_dashboard_state};

/// Headline figures on the overview tab
pub const OVERVIEW_METRICS: [SummaryMetric; 4] = [
    SummaryMetric {
        title: "Total Revenue",
        value: "$45,231.89",
        change: "+20.1% from last month",
        icon: "$",
    },
    SummaryMetric {
        title: "Subscriptions",
        value: "+2350",
        change: "+180.1% from last month",
        icon: "👥",
    },
    SummaryMetric {
        title: "Sales",
        value: "+12,234",
        change: "+19% from last month",
        icon: "💳",
    },
    SummaryMetric {
        title: "Active Now",
        value: "+573",
        change: "+201 since last hour",
        icon: "📈",
    },
];

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = provide_dashboard_state();

    // The feed lives exactly as long as this page
    match open_balance_feed(&config::get_feed_url(), state) {
        Ok(guard) => on_cleanup(move || {
            let mut guard = guard;
            guard.release();
        }),
        Err(e) => web_sys::console::error_1(&e.to_string().into()),
    }

    view! {
        <div class="space-y-4">
            // Page header
            <div class="flex flex-col md:flex-row md:items-center md:justify-between space-y-2 md:space-y-0">
                <h2 class="text-3xl font-bold tracking-tight">"Dashboard"</h2>
                <div class="flex flex-col md:flex-row md:items-center space-y-2 md:space-y-0 md:space-x-2">
                    <DateRangePicker />
                    <button class="w-full md:w-auto px-4 py-2 rounded-lg bg-white text-gray-900 text-sm font-medium hover:bg-gray-200">
                        "Download"
                    </button>
                </div>
            </div>

            <TabsList>
                <TabTrigger label="Overview" active=true />
                <TabTrigger label="Analytics" disabled=true />
                <TabTrigger label="Reports" disabled=true />
            </TabsList>

            // Overview tab
            <div class="space-y-4">
                <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                    {OVERVIEW_METRICS
                        .into_iter()
                        .map(|metric| view! { <SummaryCard metric=metric /> })
                        .collect_view()}
                </div>

                <Card>
                    <CardHeader
                        title="Asset Balances"
                        description="Real-time balance updates in USDT"
                    />
                    <div class="px-6 pb-6">
                        <BalanceTable />
                    </div>
                </Card>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_metrics() {
        let titles: Vec<_> = OVERVIEW_METRICS.iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Total Revenue", "Subscriptions", "Sales", "Active Now"]);

        assert_eq!(OVERVIEW_METRICS[0].value, "$45,231.89");
        assert_eq!(OVERVIEW_METRICS[3].change, "+201 since last hour");
    }
}
