//! Placeholder for feature sections (meals, recipes, foods, glucose).

use leptos::prelude::*;

#[component]
pub fn SectionPage(title: &'static str) -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">{title}</h1>
            <p class="page__empty">"Nothing here yet."</p>
        </section>
    }
}
