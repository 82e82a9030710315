//! Login page: username + password exchanged for a session token.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::auth_flow::{apply_outcome, submit_login};
use crate::config::ClientConfig;
use crate::net::auth_client::AuthClient;
use crate::net::in_flight::InFlight;
use crate::net::transport::BrowserTransport;
use crate::net::types::Credentials;
use crate::routes::REGISTER_PATH;
use crate::state::session_store::SessionStore;
use crate::util::alert;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let in_flight = InFlight::default();
    on_cleanup({
        let in_flight = in_flight.clone();
        move || in_flight.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            username: username.get_untracked(),
            email: String::new(),
            password: password.get_untracked(),
        };
        busy.set(true);

        let store = store.clone();
        let client = AuthClient::new(BrowserTransport::new(config.clone()));
        let pending = in_flight.run(async move { submit_login(&client, &store, credentials).await });
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            // A superseded submission resolves to `None`; the newer one owns `busy`.
            if let Some(outcome) = pending.await {
                busy.set(false);
                apply_outcome(&outcome, &alert::show, &navigate);
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2 class="auth-form__title">"Login"</h2>
                <input
                    class="auth-input"
                    type="text"
                    name="username"
                    placeholder="Username"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    name="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit">
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
                <p class="auth-form__switch">
                    "No account yet? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </form>
        </div>
    }
}
