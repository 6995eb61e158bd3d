//! Card Component

use leptos::*;

/// Bordered panel
#[component]
pub fn Card(
    /// Extra classes (grid spans and the like)
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("bg-gray-800 rounded-xl border border-gray-700 {}", class)>
            {children()}
        </div>
    }
}

/// Title block with an optional description
#[component]
pub fn CardHeader(
    title: &'static str,
    #[prop(optional)]
    description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="p-6 pb-2">
            <h3 class="text-lg font-semibold">{title}</h3>
            {description.map(|d| view! { <p class="text-sm text-gray-400 mt-1">{d}</p> })}
        </div>
    }
}
