//! Login page with email/password and Google sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::forms::validate_login_input;
use crate::util::google::listen_for_credential;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
                Ok(input) => input,
                Err(msg) => {
                    error.set(Some(msg.to_owned()));
                    return;
                }
            };
            busy.set(true);
            error.set(None);

            #[cfg(feature = "hydrate")]
            {
                let session = auth.session();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match session.login(&email_value, &password_value).await {
                        Ok(_) => navigate("/", NavigateOptions::default()),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (email_value, password_value, &navigate);
            }
        }
    };

    listen_for_credential(move |credential| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = auth.session();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let identity = session::ThirdPartyIdentity::IdToken { token_id: credential };
                match session.third_party_login(&identity).await {
                    Ok(_) => navigate("/", NavigateOptions::default()),
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, &navigate);
        }
    });

    view! {
        <Show when=move || state.with(|s| !s.loading && s.is_authenticated())>
            <Redirect path="/"/>
        </Show>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in to your account"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email address"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <div class="auth-card__divider">"Or continue with"</div>
                <div id="google-signin" class="auth-card__google"></div>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
