//! Login page: username-or-email plus password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use api::ApiError;
use api::validation::{FieldErrors, LoginForm};
use leptos::prelude::*;

use crate::components::field_error::FieldError;
use crate::components::theme_toggle::ThemeToggle;
use crate::util::auth::HOME_PATH;
use crate::util::task::{hard_redirect, spawn};

/// Banner text for a failed login.
pub fn login_failure_message(err: &ApiError) -> String {
    err.user_message("Invalid username or password")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username_or_email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        failure.set(None);
        let form = LoginForm { username_or_email: username_or_email.get(), password: password.get() };
        if let Err(field_errors) = form.validate() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        busy.set(true);

        spawn(async move {
            let api = crate::net::client::api_client();
            match api.auth().login(form.username_or_email.trim(), &form.password).await {
                Ok(user) => {
                    log::info!("signed in as {}", user.username);
                    hard_redirect(HOME_PATH);
                }
                Err(err) => {
                    log::warn!("login failed: {err}");
                    failure.set(Some(login_failure_message(&err)));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-page__theme">
                <ThemeToggle/>
            </div>
            <div class="login-card">
                <h1>"Delfos"</h1>
                <h2>"Sign In"</h2>
                <p class="login-card__subtitle">"Sign in to access your data assistant."</p>
                <Show when=move || failure.get().is_some()>
                    <div class="alert alert--error" role="alert">
                        <span>{move || failure.get().unwrap_or_default()}</span>
                        <button class="alert__dismiss" title="Dismiss" on:click=move |_| failure.set(None)>
                            "×"
                        </button>
                    </div>
                </Show>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <label class="field">
                        <span class="field__label">"Username or Email"</span>
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            placeholder="Enter your username or email"
                            prop:value=move || username_or_email.get()
                            on:input=move |ev| {
                                username_or_email.set(event_target_value(&ev));
                                errors.update(|e| e.clear("usernameOrEmail"));
                            }
                        />
                        <FieldError errors=errors field="usernameOrEmail"/>
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                errors.update(|e| e.clear("password"));
                            }
                        />
                        <FieldError errors=errors field="password"/>
                    </label>
                    <a class="login-form__forgot" href="/forgot-password">
                        "Forgot password?"
                    </a>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
