//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{navbar::Navbar, protected_route::ProtectedRoute};
use crate::config::ClientConfig;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage, task_form::TaskFormPage};
use crate::state::auth::AuthState;
use crate::state::session::default_persistence;
use crate::state::session_store::SessionStore;
use crate::util::auth::bind_auth_signal;

/// Root application component.
///
/// Creates the single session store for this page load, mirrors it into a
/// reactive `AuthState`, provides both plus the config as context, and sets up
/// client-side routing with the protected views behind `ProtectedRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|err| {
        log::error!("{err}; falling back to default client config");
        ClientConfig::default()
    });
    let store = SessionStore::restore(default_persistence());
    let auth = RwSignal::new(AuthState::pending());
    bind_auth_signal(&store, auth);

    provide_context(config);
    provide_context(store);
    provide_context(auth);

    view! {
        <Title text="Tasks"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("tasks"), StaticSegment("new"))
                        view=|| view! { <ProtectedRoute><TaskFormPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("tasks"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><TaskFormPage/></ProtectedRoute> }
                    />
                    <Route path=StaticSegment("") view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }/>
                </Routes>
            </main>
        </Router>
    }
}
