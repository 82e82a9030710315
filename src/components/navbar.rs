//! Top navigation bar with auth-aware links and logout.

use leptos::prelude::*;

use crate::routes::{HOME_PATH, LOGIN_PATH, NEW_TASK_PATH, REGISTER_PATH};
use crate::state::auth::{AuthState, GateState};
use crate::state::session_store::SessionStore;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();

    let signed_in = move || auth.get().gate_state() == GateState::Authenticated;
    let identity = move || auth.get().identity().unwrap_or("signed in").to_owned();

    // Every page showing this button is gated, so the gate takes over the
    // redirect once the session is gone.
    let on_logout = move |_| {
        log::info!("user logged out");
        store.clear_session();
    };

    view! {
        <nav class="navbar">
            <a href=HOME_PATH class="navbar__brand">"Tasks"</a>
            <span class="navbar__spacer"></span>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a href=LOGIN_PATH class="navbar__link">"Login"</a>
                        <a href=REGISTER_PATH class="navbar__link">"Register"</a>
                    }
                }
            >
                <a href=NEW_TASK_PATH class="navbar__link">"New task"</a>
                <span class="navbar__identity">{identity}</span>
            </Show>
            <button class="btn navbar__logout" on:click=on_logout hidden=move || !signed_in()>
                "Logout"
            </button>
        </nav>
    }
}
