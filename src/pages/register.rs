//! Registration page. A successful sign-up sends the user to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::auth_flow::{apply_outcome, submit_register};
use crate::config::ClientConfig;
use crate::net::auth_client::AuthClient;
use crate::net::in_flight::InFlight;
use crate::net::transport::BrowserTransport;
use crate::net::types::Credentials;
use crate::routes::LOGIN_PATH;
use crate::util::alert;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
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
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        busy.set(true);

        let client = AuthClient::new(BrowserTransport::new(config.clone()));
        let pending = in_flight.run(async move { submit_register(&client, credentials).await });
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Some(outcome) = pending.await {
                busy.set(false);
                apply_outcome(&outcome, &alert::show, &navigate);
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2 class="auth-form__title">"Register"</h2>
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
                    type="email"
                    name="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
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
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
                <p class="auth-form__switch">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Login"</a>
                </p>
            </form>
        </div>
    }
}
