//! Team Switcher
//!
//! Active team with a dropdown to pick another. Selection stays local.

use leptos::*;

use super::Team;

#[component]
pub fn TeamSwitcher(teams: &'static [Team], collapsed: ReadSignal<bool>) -> impl IntoView {
    let active = create_rw_signal(0usize);
    let open = create_rw_signal(false);

    let active_team = move || teams.get(active.get()).copied();

    view! {
        <div class="relative">
            <button
                class="w-full flex items-center space-x-2 p-2 rounded-lg hover:bg-gray-800 transition-colors"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="flex items-center justify-center w-8 h-8 rounded-lg bg-primary-600 text-white">
                    {move || active_team().map(|t| t.logo).unwrap_or("?")}
                </span>
                <span class="flex-1 text-left leading-tight" class:hidden=move || collapsed.get()>
                    <span class="block text-sm font-semibold truncate">
                        {move || active_team().map(|t| t.name).unwrap_or_default()}
                    </span>
                    <span class="block text-xs text-gray-400 truncate">
                        {move || active_team().map(|t| t.plan).unwrap_or_default()}
                    </span>
                </span>
                <span class="text-gray-500" class:hidden=move || collapsed.get()>"⇅"</span>
            </button>

            <Show when=move || open.get()>
                <div class="absolute left-0 top-full mt-1 w-56 z-10 bg-gray-800 border border-gray-700 rounded-lg shadow-lg p-1">
                    <div class="px-2 py-1 text-xs text-gray-400">"Teams"</div>
                    {teams
                        .iter()
                        .enumerate()
                        .map(|(index, team)| {
                            view! {
                                <button
                                    class="w-full flex items-center space-x-2 px-2 py-1.5 rounded hover:bg-gray-700 text-sm"
                                    class=("bg-gray-700", move || active.get() == index)
                                    on:click=move |_| {
                                        active.set(index);
                                        open.set(false);
                                    }
                                >
                                    <span class="flex items-center justify-center w-6 h-6 rounded border border-gray-600">
                                        {team.logo}
                                    </span>
                                    <span class="flex-1 text-left">{team.name}</span>
                                    <span class="text-xs text-gray-500">{team.plan}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
