//! Sidebar Projects

use leptos::*;

use super::Project;

#[component]
pub fn SidebarProjects(projects: &'static [Project], collapsed: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div class:hidden=move || collapsed.get()>
            <div class="px-2 mb-1 text-xs font-medium text-gray-500 uppercase">"Projects"</div>
            <ul class="space-y-1">
                {projects
                    .iter()
                    .map(|project| {
                        view! {
                            <li>
                                <a
                                    href=project.url
                                    class="flex items-center space-x-2 px-2 py-1.5 rounded-lg text-sm text-gray-300 hover:text-white hover:bg-gray-800"
                                >
                                    <span class="w-5 text-center">{project.icon}</span>
                                    <span>{project.name}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
