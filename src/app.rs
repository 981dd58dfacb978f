//! Tix Frontend App
//!
//! Login screen while logged out; header, ticket list and at most one overlay
//! while logged in.

use leptos::prelude::*;
use tix_core::{ClientConfig, Overlay};

use crate::components::{AppHeader, CreateTicket, Login, TicketDetail, TicketList};
use crate::context::AppContext;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let ctx = AppContext::restore(config);

    // Provide context to all children
    provide_context(ctx);

    let authenticated = Memo::new(move |_| ctx.is_authenticated());
    let overlay = Memo::new(move |_| ctx.overlay());

    let overlay_view = move || match overlay.get() {
        Overlay::None => ().into_any(),
        Overlay::Detail(ticket) => view! { <TicketDetail ticket=ticket /> }.into_any(),
        Overlay::Create => match ctx.user() {
            Some(user) => view! { <CreateTicket current_user=user /> }.into_any(),
            None => ().into_any(),
        },
    };

    view! {
        <Show when=move || authenticated.get() fallback=|| view! { <Login /> }>
            <div class="app">
                <AppHeader />
                <main class="app-main">
                    <TicketList />
                </main>
                {overlay_view}
            </div>
        </Show>
    }
}
