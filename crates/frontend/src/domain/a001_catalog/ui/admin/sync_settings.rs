use leptos::prelude::*;

use super::view_model::AdminViewModel;

/// Remote document URL and access token used by publish. Kept in the durable
/// store only; never part of the exported or published document.
#[component]
pub fn SyncSettings(vm: AdminViewModel) -> impl IntoView {
    view! {
        <form
            class="admin-section"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.save_sync_command();
            }
        >
            <label class="form-group">
                <span class="form-group__label">"Remote document URL"</span>
                <input
                    type="url"
                    placeholder="https://gist.githubusercontent.com/<owner>/<gist id>/raw/config.json"
                    prop:value=move || vm.sync_url.get()
                    on:input=move |ev| vm.sync_url.set(event_target_value(&ev))
                />
            </label>
            <label class="form-group">
                <span class="form-group__label">"Access token"</span>
                <input
                    type="password"
                    autocomplete="off"
                    prop:value=move || vm.sync_token.get()
                    on:input=move |ev| vm.sync_token.set(event_target_value(&ev))
                />
            </label>
            <p class="hint">"The token needs permission to update the gist."</p>
            <div class="admin-section__actions">
                <button type="submit" class="button button--primary">"Save sync settings"</button>
                <button
                    type="button"
                    class="button button--ghost"
                    on:click=move |_| vm.clear_sync_command()
                >
                    "Clear"
                </button>
            </div>
        </form>
    }
}
