//! Sidebar Navigation Items
//!
//! Groups of links shown in the sidebar. Items marked `coming_soon` render
//! as disabled entries.

/// Link nested under a main item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavSubItem {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Option<&'static str>,
    pub coming_soon: bool,
}

/// Top-level navigation entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavMainItem {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub sub_items: &'static [NavSubItem],
    pub coming_soon: bool,
}

/// Labeled group of entries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: &'static [NavMainItem],
}

const fn sub(title: &'static str, url: &'static str, coming_soon: bool) -> NavSubItem {
    NavSubItem {
        title,
        url,
        icon: None,
        coming_soon,
    }
}

pub const SIDEBAR_ITEMS: &[NavGroup] = &[
    NavGroup {
        label: "Overview",
        items: &[NavMainItem {
            title: "Dashboard",
            url: "/dashboard",
            icon: "📊",
            sub_items: &[
                NavSubItem {
                    title: "Default",
                    url: "/dashboard",
                    icon: Some("🥧"),
                    coming_soon: false,
                },
                sub("CRM", "/dashboard/crm", true),
                sub("Analytics", "/dashboard/analytics", true),
            ],
            coming_soon: false,
        }],
    },
    NavGroup {
        label: "Pages",
        items: &[
            NavMainItem {
                title: "Authentication",
                url: "/auth",
                icon: "🔐",
                sub_items: &[
                    sub("Login", "/auth/login", true),
                    sub("Register", "/auth/register", true),
                ],
                coming_soon: false,
            },
            NavMainItem {
                title: "Email",
                url: "/mail",
                icon: "✉️",
                sub_items: &[],
                coming_soon: true,
            },
            NavMainItem {
                title: "Chat",
                url: "/chat",
                icon: "💬",
                sub_items: &[],
                coming_soon: true,
            },
            NavMainItem {
                title: "Calendar",
                url: "/calendar",
                icon: "📅",
                sub_items: &[],
                coming_soon: true,
            },
            NavMainItem {
                title: "Kanban",
                url: "/kanban",
                icon: "🗂️",
                sub_items: &[],
                coming_soon: true,
            },
            NavMainItem {
                title: "Users",
                url: "/users",
                icon: "👥",
                sub_items: &[],
                coming_soon: true,
            },
        ],
    },
];
