//! Tabs Component
//!
//! Tab strip for the overview page. Only the active tab has content.

use leptos::*;

#[component]
pub fn TabsList(children: Children) -> impl IntoView {
    view! {
        <div class="inline-flex items-center p-1 rounded-lg bg-gray-800 text-gray-400">
            {children()}
        </div>
    }
}

#[component]
pub fn TabTrigger(
    label: &'static str,
    #[prop(optional)]
    active: bool,
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let class = if active {
        "px-3 py-1 rounded-md text-sm font-medium bg-gray-900 text-white shadow"
    } else {
        "px-3 py-1 rounded-md text-sm font-medium disabled:opacity-50 disabled:cursor-not-allowed"
    };

    view! {
        <button class=class disabled=disabled aria-selected=active.to_string()>
            {label}
        </button>
    }
}
