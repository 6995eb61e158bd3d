//! Summary Card Component
//!
//! Fixed headline figure with a comparison line.

use leptos::*;

use super::card::Card;

/// One headline figure on the overview page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: &'static str,
}

#[component]
pub fn SummaryCard(metric: SummaryMetric) -> impl IntoView {
    view! {
        <Card>
            <div class="flex items-center justify-between p-6 pb-2">
                <span class="text-sm font-medium">{metric.title}</span>
                <span class="text-gray-400">{metric.icon}</span>
            </div>
            <div class="px-6 pb-6">
                <div class="text-2xl font-bold">{metric.value}</div>
                <p class="text-xs text-gray-400">{metric.change}</p>
            </div>
        </Card>
    }
}
