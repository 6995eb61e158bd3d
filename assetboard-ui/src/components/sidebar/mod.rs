//! Sidebar Shell
//!
//! Collapsible sidebar: team switcher, navigation, projects and the user
//! menu. In icon mode only the icons stay visible.

mod footer_menu;
mod navigation;
mod projects;
mod team_switcher;

pub use footer_menu::SidebarFooterMenu;
pub use navigation::SidebarNavigation;
pub use projects::SidebarProjects;
pub use team_switcher::TeamSwitcher;

use leptos::*;

use crate::navigation::SIDEBAR_ITEMS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Team {
    pub name: &'static str,
    pub logo: &'static str,
    pub plan: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarUser {
    pub name: &'static str,
    pub email: &'static str,
    /// Image URL; empty falls back to initials
    pub avatar: &'static str,
}

pub const USER: SidebarUser = SidebarUser {
    name: "Khanh Nguyen",
    email: "khanhnguyen@example.com",
    avatar: "",
};

pub const TEAMS: &[Team] = &[
    Team {
        name: "Khanh Nguyen",
        logo: "▤",
        plan: "Enterprise",
    },
    Team {
        name: "Khanh Nguyen",
        logo: "〰",
        plan: "Startup",
    },
    Team {
        name: "Khanh Nguyen",
        logo: "⌘",
        plan: "Free",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Design Engineering",
        url: "#",
        icon: "🖼️",
    },
    Project {
        name: "Sales & Marketing",
        url: "#",
        icon: "📈",
    },
    Project {
        name: "Travel",
        url: "#",
        icon: "🗺️",
    },
];

/// Sidebar shown on every page
#[component]
pub fn AppSidebar() -> impl IntoView {
    let collapsed = create_rw_signal(false);

    view! {
        <aside
            class="relative flex flex-col bg-gray-900 border-r border-gray-800 transition-all duration-200"
            class=("w-64", move || !collapsed.get())
            class=("w-16", move || collapsed.get())
        >
            // Header
            <div class="p-2 border-b border-gray-800">
                <TeamSwitcher teams=TEAMS collapsed=collapsed.read_only() />
            </div>

            // Content
            <div class="flex-1 overflow-y-auto p-2 space-y-4">
                <SidebarNavigation groups=SIDEBAR_ITEMS collapsed=collapsed.read_only() />
                <SidebarProjects projects=PROJECTS collapsed=collapsed.read_only() />
            </div>

            // Footer
            <div class="p-2 border-t border-gray-800">
                <SidebarFooterMenu user=USER collapsed=collapsed.read_only() />
            </div>

            // Rail toggles icon mode
            <button
                class="absolute inset-y-0 -right-2 w-4 cursor-ew-resize hover:bg-gray-700/40"
                title="Toggle Sidebar"
                on:click=move |_| collapsed.update(|c| *c = !*c)
            />
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_shell_data() {
        assert_eq!(TEAMS.len(), 3);
        assert_eq!(
            TEAMS.iter().map(|t| t.plan).collect::<Vec<_>>(),
            vec!["Enterprise", "Startup", "Free"]
        );
        assert_eq!(
            PROJECTS.iter().map(|p| p.name).collect::<Vec<_>>(),
            vec!["Design Engineering", "Sales & Marketing", "Travel"]
        );
        assert!(USER.avatar.is_empty());
    }
}
