//! Auth gate wrapped around every view that needs a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the reactive `AuthState` provided by `App`. Children render only in
//! the authenticated state; an unauthenticated visit is redirected to
//! `/login` and the requested destination is not remembered.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{GateDecision, gate};
use crate::state::auth::AuthState;
use crate::util::auth::{current_route, install_gate_redirect};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let decision = Memo::new(move |_| gate(&current_route(&location.pathname.get()), &auth.get()));
    install_gate_redirect(decision, use_navigate());

    view! {
        <Show when=move || decision.get() == GateDecision::Render>
            {children()}
        </Show>
    }
}
