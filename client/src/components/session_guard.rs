//! Route guard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route group's outlet. On every path change (and every session
//! transition) it re-reads persisted storage, runs `util::guard::evaluate`,
//! and either renders its children or navigates away. Nothing protected is
//! rendered until a check has allowed it, including during SSR where
//! effects never run.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::use_session;
use crate::util::guard::{GuardStatus, GuardVariant, SessionSnapshot, evaluate};

#[component]
pub fn SessionGuard(variant: GuardVariant, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();
    let status = RwSignal::new(GuardStatus::Checking);

    Effect::new(move || {
        let path = location.pathname.get();
        session.state.track();

        let snapshot = SessionSnapshot::read(&session.storage());
        let next = GuardStatus::from(evaluate(variant, &snapshot, &path));
        if let GuardStatus::Redirecting(target) = next {
            log::debug!("guard redirecting {path} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        status.set(next);
    });

    view! {
        <Show
            when=move || status.get() == GuardStatus::Allowed
            fallback=|| view! { <p class="session-guard__pending">"Checking session..."</p> }
        >
            {children()}
        </Show>
    }
}
