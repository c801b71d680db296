use leptos::prelude::*;

use super::ad_editor::AdEditor;
use super::category_editor::CategoryEditor;
use super::login::LoginForm;
use super::site_editor::SiteEditor;
use super::sync_settings::SyncSettings;
use super::view_model::{AdminTab, AdminViewModel};
use crate::shared::file_reader::take_selected_file;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::RequireAdmin;

/// Admin modal. Closing it locks the editor again.
#[component]
pub fn AdminModal(open: RwSignal<bool>) -> impl IntoView {
    let vm = AdminViewModel::new();

    let close = Callback::new(move |_| {
        vm.reset();
        open.set(false);
    });

    view! {
        <Show when=move || open.get()>
            <ModalFrame on_close=close title="Admin panel" modal_class="admin-modal".to_string()>
                <RequireAdmin fallback=move || view! { <LoginForm vm=vm /> }>
                    <AdminWorkspace vm=vm />
                </RequireAdmin>
            </ModalFrame>
        </Show>
    }
}

#[component]
fn AdminWorkspace(vm: AdminViewModel) -> impl IntoView {
    let config = vm.config;

    view! {
        <div class="admin-actions">
            <button class="button button--secondary" on:click=move |_| vm.export_command()>
                {icon("download")}
                "Export"
            </button>
            <label class="button button--secondary">
                {icon("upload")}
                "Import"
                <input
                    type="file"
                    accept="application/json,.json"
                    style="display: none;"
                    on:change=move |ev| {
                        if let Some(file) = take_selected_file(&ev) {
                            vm.import_command(file);
                        }
                    }
                />
            </label>
            <button
                class="button button--primary"
                disabled=move || vm.publishing.get()
                on:click=move |_| vm.publish_command()
            >
                {icon("cloud")}
                {move || if vm.publishing.get() { "Publishing..." } else { "Publish" }}
            </button>
            <button class="button button--ghost" on:click=move |_| vm.session.logout()>
                "Log out"
            </button>
            <span class="admin-actions__source">
                {move || config.source().map(|source| format!("Loaded from {}", source.label()))}
            </span>
        </div>

        <nav class="admin-tabs">
            {AdminTab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || if vm.tab.get() == tab { "admin-tab active" } else { "admin-tab" }
                            on:click=move |_| vm.tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>

        <div class="admin-tab-content">
            {move || match vm.tab.get() {
                AdminTab::Site => view! { <SiteEditor config=config /> }.into_any(),
                AdminTab::Categories => view! { <CategoryEditor config=config /> }.into_any(),
                AdminTab::Ads => view! { <AdEditor config=config /> }.into_any(),
                AdminTab::Sync => view! { <SyncSettings vm=vm /> }.into_any(),
            }}
        </div>
    }
}
