use leptos::prelude::*;

use super::context::use_admin_session;

/// Renders `children` only for an unlocked admin session, `fallback` otherwise.
#[component]
pub fn RequireAdmin(#[prop(into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let session = use_admin_session();

    view! {
        <Show when=move || session.is_authenticated() fallback=fallback>
            {children()}
        </Show>
    }
}
