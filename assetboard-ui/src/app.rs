//! App Root Component
//!
//! Sidebar shell and routing.

use leptos::*;
use leptos_router::*;

use crate::components::AppSidebar;
use crate::pages::{Dashboard, NotFound};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-950 text-white flex">
                <AppSidebar />

                // Main content area
                <main class="flex-1 min-w-0 px-4 py-8 md:px-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
