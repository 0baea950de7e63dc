//! Placeholder password-recovery screen.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::util::auth::LOGIN_PATH;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-page__theme">
                <ThemeToggle/>
            </div>
            <div class="login-card">
                <h2>"Forgot Password"</h2>
                <p class="login-card__subtitle">"This page will be implemented soon"</p>
                <a class="login-button" href=LOGIN_PATH>
                    "Back to Login"
                </a>
            </div>
        </div>
    }
}
