//! Sidebar Footer Menu
//!
//! Signed-in user with avatar, name and email.

use leptos::*;

use super::SidebarUser;

/// Uppercase first letter of each word ("Khanh Nguyen" -> "KN")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn SidebarFooterMenu(user: SidebarUser, collapsed: ReadSignal<bool>) -> impl IntoView {
    let avatar = if user.avatar.is_empty() {
        view! {
            <span class="flex items-center justify-center w-8 h-8 rounded-lg bg-gray-700 text-xs font-semibold">
                {initials(user.name)}
            </span>
        }
        .into_view()
    } else {
        view! { <img class="w-8 h-8 rounded-lg" src=user.avatar alt=user.name /> }.into_view()
    };

    view! {
        <div class="flex items-center space-x-2 p-2 rounded-lg hover:bg-gray-800">
            {avatar}
            <div class="flex-1 leading-tight min-w-0" class:hidden=move || collapsed.get()>
                <div class="text-sm font-semibold truncate">{user.name}</div>
                <div class="text-xs text-gray-400 truncate">{user.email}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Khanh Nguyen"), "KN");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials("  "), "");
    }
}
