//! Dashboard landing page inside the authenticated shell.

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::util::nav::NAV_ITEMS;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_auth().state();
    let greeting = move || {
        state.with(|s| match s.user.as_ref().and_then(|u| u.name.as_deref()) {
            Some(name) => format!("Welcome back, {name}"),
            None => "Welcome back".to_owned(),
        })
    };

    view! {
        <section class="page page--home">
            <h1 class="page__title">{greeting}</h1>
            <ul class="home__shortcuts">
                {NAV_ITEMS
                    .iter()
                    .filter(|item| item.path != "/")
                    .map(|item| view! {
                        <li><a class="home__shortcut" href=item.path>{item.label}</a></li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
