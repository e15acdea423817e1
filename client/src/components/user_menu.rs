//! Header avatar with the user dropdown (profile link, retry, logout).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::display;
use session::guard::LOGIN_PATH;

use crate::state::auth::use_auth;

#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    let open = RwSignal::new(false);
    let navigate = use_navigate();

    let initials = move || state.with(|s| display::initials(s.user.as_ref()));
    let label = move || state.with(|s| display::menu_label(s.user.as_ref()));
    let unresolved = move || state.with(display::profile_unresolved);
    let cause = move || state.with(|s| s.error.clone().unwrap_or_default());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        open.set(false);
        auth.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="user-menu">
            <button
                class="user-menu__avatar"
                type="button"
                aria-haspopup="menu"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {initials}
            </button>
            <Show when=move || open.get()>
                <div class="user-menu__dropdown" role="menu">
                    <div class="user-menu__label">{label}</div>
                    <Show when=unresolved>
                        <p class="user-menu__notice" role="status">{cause}</p>
                        <button
                            class="user-menu__item"
                            type="button"
                            role="menuitem"
                            on:click=move |_| {
                                open.set(false);
                                auth.refresh();
                            }
                        >
                            "Retry loading profile"
                        </button>
                    </Show>
                    <a href="/profile" class="user-menu__item" role="menuitem" on:click=move |_| open.set(false)>
                        "Your Profile"
                    </a>
                    <button class="user-menu__item" type="button" role="menuitem" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
