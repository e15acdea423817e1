//! Route guard wrapping the authenticated part of the app.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use session::guard::{self, GuardDecision, LOGIN_PATH};

use crate::state::auth::use_auth;

/// Renders `children` only once the session is resolved and authenticated.
/// While the initial token check runs, shows a neutral placeholder; when it
/// settles unauthenticated, redirects to the login view.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let state = use_auth().state();
    let decision = Memo::new(move |_| guard::decide(&state.get()));

    move || match decision.get() {
        GuardDecision::Pending => view! { <div class="route-pending" aria-busy="true"></div> }.into_any(),
        GuardDecision::RedirectToLogin => view! { <Redirect path=LOGIN_PATH/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
