//! Authenticated shell: sidebar, header and the routed page outlet.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;
use crate::components::user_menu::UserMenu;

#[component]
pub fn MainLayout() -> impl IntoView {
    let sidebar_open = RwSignal::new(false);

    view! {
        <div class="layout">
            <Sidebar open=sidebar_open/>
            <div class="layout__content">
                <header class="layout__header">
                    <button
                        class="layout__menu-toggle"
                        type="button"
                        aria-label="Open sidebar"
                        on:click=move |_| sidebar_open.set(true)
                    >
                        "☰"
                    </button>
                    <UserMenu/>
                </header>
                <main class="layout__main">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
