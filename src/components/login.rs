//! Login Component
//!
//! Username/password form with a "Remember me" choice.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tix_core::controller;
use tix_core::LoginRequest;

use crate::commands::TauriGateway;
use crate::context::use_app_context;

/// Login screen shown while logged out
#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember_me, set_remember_me) = signal(false);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            username: username.get(),
            password: password.get(),
            remember_me: remember_me.get(),
        };
        if request.username.trim().is_empty() || request.password.is_empty() {
            set_error.set("Please enter both username and password".to_string());
            return;
        }

        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            match controller::login(&TauriGateway, &request).await {
                Ok(user) => ctx.logged_in(user, request.remember_me),
                Err(e) => {
                    set_error.try_set(e.message);
                }
            }
            // The form is unmounted after a successful login
            set_loading.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <h1>"Tix"</h1>
                <p class="login-subtitle">"Ticket Management System"</p>

                <form class="login-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="error-message">{move || error.get()}</div>
                    </Show>

                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            class="form-input"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            class="form-input"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="form-group checkbox-group">
                        <label for="remember-me">
                            <input
                                id="remember-me"
                                type="checkbox"
                                prop:checked=move || remember_me.get()
                                on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                                disabled=move || loading.get()
                            />
                            "Remember me"
                        </label>
                    </div>

                    <button type="submit" class="login-button" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
