//! Profile page: shows the current user and edits name/email.

use leptos::prelude::*;

use crate::state::auth::use_auth;
use crate::util::forms::build_profile_update;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    // Re-seed the form whenever the resolved user changes.
    Effect::new(move |_| {
        let user = state.with(|s| s.user.clone());
        name.set(user.as_ref().and_then(|u| u.name.clone()).unwrap_or_default());
        email.set(user.and_then(|u| u.email).unwrap_or_default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = state.with_untracked(|s| s.user.clone());
        let update = match build_profile_update(current.as_ref(), &name.get(), &email.get()) {
            Ok(update) => update,
            Err(msg) => {
                notice.set(Some(Err(msg.to_owned())));
                return;
            }
        };
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = auth.session();
            leptos::task::spawn_local(async move {
                match session.update_user(&update).await {
                    Ok(_) => notice.set(Some(Ok("Profile updated.".to_owned()))),
                    Err(e) => notice.set(Some(Err(e.to_string()))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (update, &auth);
        }
    };

    let member_since = move || {
        state.with(|s| {
            s.user
                .as_ref()
                .and_then(|u| u.created_at.as_deref())
                .map(|ts| ts.split('T').next().unwrap_or(ts).to_owned())
        })
    };

    view! {
        <section class="page page--profile">
            <h1 class="page__title">"Your Profile"</h1>
            {move || notice.get().map(|n| match n {
                Ok(msg) => view! { <p class="notice notice--ok">{msg}</p> }.into_any(),
                Err(msg) => view! { <p class="notice notice--error" role="alert">{msg}</p> }.into_any(),
            })}
            <form class="profile-form" on:submit=on_submit>
                <label class="profile-form__field">
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__field">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || member_since().is_some()>
                    <p class="profile-form__meta">"Member since " {move || member_since().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </section>
    }
}
