//! Sidebar Navigation
//!
//! Renders the grouped navigation table. Entries with sub-items expand in
//! place; placeholder entries are shown disabled with a "Soon" badge.

use leptos::*;
use leptos_router::*;

use crate::navigation::{NavGroup, NavMainItem, NavSubItem};

#[component]
pub fn SidebarNavigation(groups: &'static [NavGroup], collapsed: ReadSignal<bool>) -> impl IntoView {
    view! {
        <nav class="space-y-4">
            {groups
                .iter()
                .map(|group| {
                    view! {
                        <div>
                            <div
                                class="px-2 mb-1 text-xs font-medium text-gray-500 uppercase"
                                class:hidden=move || collapsed.get()
                            >
                                {group.label}
                            </div>
                            <ul class="space-y-1">
                                {group
                                    .items
                                    .iter()
                                    .map(|item| view! { <NavEntry item=*item collapsed=collapsed /> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// One top-level entry
#[component]
fn NavEntry(item: NavMainItem, collapsed: ReadSignal<bool>) -> impl IntoView {
    if item.coming_soon {
        return view! {
            <li class="flex items-center space-x-2 px-2 py-1.5 rounded-lg text-gray-500 cursor-not-allowed">
                <span class="w-5 text-center">{item.icon}</span>
                <span class="flex-1 text-sm" class:hidden=move || collapsed.get()>{item.title}</span>
                <SoonBadge collapsed=collapsed />
            </li>
        }
        .into_view();
    }

    if item.sub_items.is_empty() {
        return view! {
            <li>
                <A
                    href=item.url
                    class="flex items-center space-x-2 px-2 py-1.5 rounded-lg text-gray-300 hover:text-white hover:bg-gray-800 transition-colors"
                    active_class="bg-gray-800 text-white"
                >
                    <span class="w-5 text-center">{item.icon}</span>
                    <span class="text-sm" class:hidden=move || collapsed.get()>{item.title}</span>
                </A>
            </li>
        }
        .into_view();
    }

    let expanded = create_rw_signal(true);

    view! {
        <li>
            <button
                class="w-full flex items-center space-x-2 px-2 py-1.5 rounded-lg text-gray-300 hover:text-white hover:bg-gray-800 transition-colors"
                on:click=move |_| expanded.update(|e| *e = !*e)
            >
                <span class="w-5 text-center">{item.icon}</span>
                <span class="flex-1 text-left text-sm" class:hidden=move || collapsed.get()>
                    {item.title}
                </span>
                <span class="text-xs text-gray-500" class:hidden=move || collapsed.get()>
                    {move || if expanded.get() { "▾" } else { "▸" }}
                </span>
            </button>
            <Show when=move || expanded.get() && !collapsed.get()>
                <ul class="ml-6 mt-1 pl-2 border-l border-gray-800 space-y-1">
                    {item
                        .sub_items
                        .iter()
                        .map(|sub_item| view! { <NavSubEntry item=*sub_item /> })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
    .into_view()
}

#[component]
fn NavSubEntry(item: NavSubItem) -> impl IntoView {
    if item.coming_soon {
        view! {
            <li class="flex items-center px-2 py-1 text-sm text-gray-500 cursor-not-allowed">
                <span class="flex-1">{item.title}</span>
                <span class="text-[10px] px-1.5 rounded bg-gray-800 text-gray-400">"Soon"</span>
            </li>
        }
        .into_view()
    } else {
        view! {
            <li>
                <A
                    href=item.url
                    class="flex items-center space-x-2 px-2 py-1 rounded text-sm text-gray-300 hover:text-white hover:bg-gray-800"
                    active_class="text-white"
                >
                    {item.icon.map(|icon| view! { <span>{icon}</span> })}
                    <span>{item.title}</span>
                </A>
            </li>
        }
        .into_view()
    }
}

#[component]
fn SoonBadge(collapsed: ReadSignal<bool>) -> impl IntoView {
    view! {
        <span
            class="text-[10px] px-1.5 rounded bg-gray-800 text-gray-400"
            class:hidden=move || collapsed.get()
        >
            "Soon"
        </span>
    }
}
