//! Ticket Detail Overlay
//!
//! Read-only view of one ticket with edit-in-place. Edits go into a local
//! draft; Save sends only the fields that differ from the original.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tix_core::{
    category_class, format_timestamp, status_class, submit_update, DateStyle, Ticket,
    TICKET_CATEGORIES, TICKET_STATUSES,
};

use crate::commands::TauriGateway;
use crate::context::use_app_context;

#[component]
pub fn TicketDetail(ticket: Ticket) -> impl IntoView {
    let ctx = use_app_context();
    let original = StoredValue::new(ticket.clone());

    let (editing, set_editing) = signal(false);
    let draft = RwSignal::new(ticket.clone());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let on_save = move |_| {
        let before = original.get_value();
        let after = draft.get();
        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            match submit_update(&TauriGateway, &before, &after).await {
                Ok(_) => {
                    set_editing.try_set(false);
                    ctx.ticket_updated();
                }
                Err(e) => {
                    set_error.try_set(e.message);
                }
            }
            set_loading.try_set(false);
        });
    };

    let on_cancel = move |_| {
        draft.set(original.get_value());
        set_editing.set(false);
        set_error.set(String::new());
    };

    let category_badge = format!("category-badge {}", category_class(&ticket.category));
    let status_badge = format!("status-badge {}", status_class(&ticket.status));

    view! {
        <div class="ticket-detail-overlay">
            <div class="ticket-detail-container">
                <div class="ticket-detail-header">
                    <h2>"Ticket Details"</h2>
                    <div class="header-actions">
                        <Show when=move || !editing.get()>
                            <button class="edit-button" on:click=move |_| set_editing.set(true)>
                                "Edit"
                            </button>
                        </Show>
                        <button class="close-button" on:click=move |_| ctx.close_overlay()>
                            "×"
                        </button>
                    </div>
                </div>

                <div class="ticket-detail-content">
                    <Show when=move || !error.get().is_empty()>
                        <div class="error-message">{move || error.get()}</div>
                    </Show>

                    <div class="detail-section">
                        <div class="detail-row">
                            <label>"Category:"</label>
                            <Show
                                when=move || editing.get()
                                fallback={
                                    let category = ticket.category.clone();
                                    let badge = category_badge.clone();
                                    move || view! { <span class=badge.clone()>{category.clone()}</span> }
                                }
                            >
                                <select
                                    class="edit-select"
                                    on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                                >
                                    {TICKET_CATEGORIES.iter().map(|&category| {
                                        let selected = move || draft.with(|d| d.category == category);
                                        view! { <option value=category selected=selected>{category}</option> }
                                    }).collect_view()}
                                </select>
                            </Show>
                        </div>

                        <div class="detail-row">
                            <label>"Title:"</label>
                            <Show
                                when=move || editing.get()
                                fallback={
                                    let title = ticket.title.clone();
                                    move || view! { <span class="detail-value">{title.clone()}</span> }
                                }
                            >
                                <input
                                    type="text"
                                    class="edit-input"
                                    prop:value=move || draft.with(|d| d.title.clone())
                                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                                />
                            </Show>
                        </div>

                        <div class="detail-row">
                            <label>"Status:"</label>
                            <Show
                                when=move || editing.get()
                                fallback={
                                    let status = ticket.status.clone();
                                    let badge = status_badge.clone();
                                    move || view! { <span class=badge.clone()>{status.clone()}</span> }
                                }
                            >
                                <select
                                    class="edit-select"
                                    on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                                >
                                    {TICKET_STATUSES.iter().map(|&status| {
                                        let selected = move || draft.with(|d| d.status == status);
                                        view! { <option value=status selected=selected>{status}</option> }
                                    }).collect_view()}
                                </select>
                            </Show>
                        </div>

                        <div class="detail-row">
                            <label>"Assignee:"</label>
                            <Show
                                when=move || editing.get()
                                fallback={
                                    let assignee = ticket.assignee.clone();
                                    move || view! { <span class="detail-value">{assignee.clone()}</span> }
                                }
                            >
                                <input
                                    type="text"
                                    class="edit-input"
                                    prop:value=move || draft.with(|d| d.assignee.clone())
                                    on:input=move |ev| draft.update(|d| d.assignee = event_target_value(&ev))
                                />
                            </Show>
                        </div>

                        <div class="detail-row">
                            <label>"Reporter:"</label>
                            <span class="detail-value">{ticket.reporter.clone()}</span>
                        </div>

                        <div class="detail-row">
                            <label>"Created:"</label>
                            <span class="detail-value">
                                {format_timestamp(&ticket.created_date, DateStyle::Long)}
                            </span>
                        </div>

                        <div class="detail-row">
                            <label>"Updated:"</label>
                            <span class="detail-value">
                                {format_timestamp(&ticket.updated_at, DateStyle::Long)}
                            </span>
                        </div>
                    </div>

                    <div class="description-section">
                        <label>"Description:"</label>
                        <Show
                            when=move || editing.get()
                            fallback={
                                let description = ticket.description.clone();
                                move || view! { <div class="description-content">{description.clone()}</div> }
                            }
                        >
                            <textarea
                                class="edit-textarea"
                                rows="6"
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            ></textarea>
                        </Show>
                    </div>

                    <Show when=move || editing.get()>
                        <div class="edit-actions">
                            <button class="save-button" on:click=on_save disabled=move || loading.get()>
                                {move || if loading.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                            <button class="cancel-button" on:click=on_cancel disabled=move || loading.get()>
                                "Cancel"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
