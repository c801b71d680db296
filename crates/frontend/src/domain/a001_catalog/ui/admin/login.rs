use leptos::prelude::*;

use super::view_model::AdminViewModel;

#[component]
pub fn LoginForm(vm: AdminViewModel) -> impl IntoView {
    view! {
        <form
            class="login-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.login_command();
            }
        >
            <label class="form-group">
                <span class="form-group__label">"Username"</span>
                <input
                    type="text"
                    autocomplete="username"
                    prop:value=move || vm.username.get()
                    on:input=move |ev| vm.username.set(event_target_value(&ev))
                />
            </label>
            <label class="form-group">
                <span class="form-group__label">"Password"</span>
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || vm.password.get()
                    on:input=move |ev| vm.password.set(event_target_value(&ev))
                />
            </label>
            {move || vm.login_error.get().map(|e| view! { <div class="error">{e}</div> })}
            <button type="submit" class="button button--primary">"Log in"</button>
        </form>
    }
}
