//! Google sign-in credential hand-off.
//!
//! The Google Identity Services button lives in the page template; its
//! callback re-dispatches the ID token as a `google-credential`
//! `CustomEvent` on `window`, whose `detail` is the token string.

#[cfg(test)]
#[path = "google_test.rs"]
mod google_test;

pub const GOOGLE_CREDENTIAL_EVENT: &str = "google-credential";

/// Accept a credential only if it is a non-blank string.
pub fn credential_from_detail(detail: Option<String>) -> Option<String> {
    detail.map(|d| d.trim().to_owned()).filter(|d| !d.is_empty())
}

/// Invoke `on_credential` for every credential event until the owner is
/// cleaned up.
pub fn listen_for_credential<F>(on_credential: F)
where
    F: Fn(String) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{on_cleanup, window_event_listener_untyped};
        use wasm_bindgen::JsCast;

        let handle = window_event_listener_untyped(GOOGLE_CREDENTIAL_EVENT, move |ev| {
            let detail = ev
                .dyn_ref::<web_sys::CustomEvent>()
                .and_then(|custom| custom.detail().as_string());
            match credential_from_detail(detail) {
                Some(credential) => on_credential(credential),
                None => log::warn!("ignoring {GOOGLE_CREDENTIAL_EVENT} event without a credential"),
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_credential;
    }
}
