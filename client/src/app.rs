//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::{main_layout::MainLayout, require_auth::RequireAuth};
use crate::pages::{
    home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage,
    section::SectionPage,
};
use crate::state::auth::provide_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth();

    view! {
        <Stylesheet id="leptos" href="/pkg/nutritrack.css"/>
        <Title text="Nutrition Tracker"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/404"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("404") view=NotFoundPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedShell>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("meals") view=|| view! { <SectionPage title="Meals"/> }/>
                    <Route path=StaticSegment("recipes") view=|| view! { <SectionPage title="Recipes"/> }/>
                    <Route path=StaticSegment("foods") view=|| view! { <SectionPage title="Foods"/> }/>
                    <Route path=StaticSegment("glucose") view=|| view! { <SectionPage title="Glucose Monitoring"/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout/>
        </RequireAuth>
    }
}
