pub mod footer;
pub mod global_context;
pub mod header;
pub mod info_modal;

use leptos::prelude::*;

use crate::domain::a001_catalog::ui::admin::AdminModal;
use crate::shared::config_sync::{use_config, LoadState};
use crate::shared::toast::ToastHost;
use footer::Footer;
use global_context::use_global_context;
use header::Header;
use info_modal::InfoModal;

/// Application shell.
///
/// ```text
/// +------------------------------+
/// |            Header            |
/// +------------------------------+
/// |        routed content        |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
///
/// Nothing renders until the configuration is available; a terminal
/// acquisition failure replaces the whole page with its message.
#[derive(Debug, Clone, PartialEq)]
enum ShellStatus {
    Loading,
    Failed(String),
    Ready,
}

#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let config = use_config();
    let ctx = use_global_context();

    // Edits to the document must not rebuild the shell.
    let status = Memo::new(move |_| {
        config.state.with(|state| match state {
            LoadState::Loading => ShellStatus::Loading,
            LoadState::Failed(error) => ShellStatus::Failed(error.clone()),
            LoadState::Ready { .. } => ShellStatus::Ready,
        })
    });

    view! {
        {move || match status.get() {
            ShellStatus::Failed(error) => {
                view! {
                    <div class="app-error">
                        <h1>"Could not load the catalog"</h1>
                        <p>{error}</p>
                    </div>
                }
                .into_any()
            }
            ShellStatus::Loading => {
                view! { <div class="app-loading">"Loading..."</div> }.into_any()
            }
            ShellStatus::Ready => {
                view! {
                    <div class="app-layout">
                        <Header />
                        <main class="app-main">{children()}</main>
                        <Footer />
                    </div>
                    <InfoModal />
                    <AdminModal open=ctx.admin_open />
                }
                .into_any()
            }
        }}
        <ToastHost />
    }
}
