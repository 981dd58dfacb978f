//! App Header Component
//!
//! Title bar with the logged-in user's name and a logout button.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();
    let username = move || ctx.user().map(|u| u.username).unwrap_or_default();

    view! {
        <header class="app-header">
            <div class="header-content">
                <h1>"Tix - Ticket Management System"</h1>
                <div class="header-actions">
                    <span class="user-info">{move || format!("Welcome, {}", username())}</span>
                    <button class="logout-button" on:click=move |_| ctx.logout()>
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}
