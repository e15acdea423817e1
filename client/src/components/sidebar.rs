//! Sidebar navigation for the authenticated shell.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::nav::{NAV_ITEMS, link_class};

/// Sidebar with section links. `open` controls visibility on narrow screens.
#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let pathname = use_location().pathname;

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let path = item.path;
            view! {
                <a
                    href=path
                    class=move || link_class(&pathname.get(), path)
                    on:click=move |_| open.set(false)
                >
                    {item.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class=move || if open.get() { "sidebar sidebar--open" } else { "sidebar" }>
            <div class="sidebar__header">
                <a href="/" class="sidebar__brand">"Nutrition Tracker"</a>
                <button class="sidebar__close" type="button" on:click=move |_| open.set(false)>
                    "×"
                </button>
            </div>
            <nav class="sidebar__nav">{links}</nav>
        </aside>
    }
}
