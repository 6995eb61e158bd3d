//! Date Range Picker Component
//!
//! Button showing the selected range with a popover of two date inputs.
//! The range is kept on the page only.

use leptos::*;

use crate::state::{DashboardState, DateRange};

#[component]
pub fn DateRangePicker() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let open = create_rw_signal(false);

    let input_value = |date: Option<chrono::NaiveDate>| {
        date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
    };

    view! {
        <div class="relative w-full md:w-auto">
            <button
                class="w-full md:w-72 flex items-center space-x-2 px-3 py-2 rounded-lg border border-gray-700 bg-gray-800 text-sm text-left hover:bg-gray-700"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span>"📅"</span>
                <span
                    class="flex-1"
                    class=("text-gray-400", move || state.date_range.get().start.is_none())
                >
                    {move || state.date_range.get().label()}
                </span>
            </button>

            <Show when=move || open.get()>
                <div class="absolute right-0 mt-1 z-10 flex items-center space-x-2 p-3 bg-gray-800 border border-gray-700 rounded-lg shadow-lg">
                    <input
                        type="date"
                        class="bg-gray-900 border border-gray-700 rounded px-2 py-1 text-sm"
                        prop:value=move || input_value(state.date_range.get().start)
                        on:change=move |ev| {
                            let start = DateRange::parse_input(&event_target_value(&ev));
                            state.date_range.update(|range| *range = range.with_start(start));
                        }
                    />
                    <span class="text-gray-500">"–"</span>
                    <input
                        type="date"
                        class="bg-gray-900 border border-gray-700 rounded px-2 py-1 text-sm"
                        prop:value=move || input_value(state.date_range.get().end)
                        on:change=move |ev| {
                            let end = DateRange::parse_input(&event_target_value(&ev));
                            state.date_range.update(|range| *range = range.with_end(end));
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
