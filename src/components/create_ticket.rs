//! Create Ticket Overlay
//!
//! Form for new tickets. Required fields are checked before anything is sent;
//! the reporter is always the logged-in user.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tix_core::{submit_create, CreateTicketForm, User, TICKET_CATEGORIES};

use crate::commands::TauriGateway;
use crate::context::use_app_context;

#[component]
pub fn CreateTicket(current_user: User) -> impl IntoView {
    let ctx = use_app_context();

    let form = RwSignal::new(CreateTicketForm::for_user(&current_user));
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get();
        if let Err(e) = snapshot.validate() {
            set_error.set(e.to_string());
            return;
        }

        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            match submit_create(&TauriGateway, &snapshot).await {
                Ok(_) => ctx.ticket_created(),
                Err(e) => {
                    set_error.try_set(e.to_string());
                }
            }
            set_loading.try_set(false);
        });
    };

    view! {
        <div class="create-ticket-overlay">
            <div class="create-ticket-container">
                <div class="create-ticket-header">
                    <h2>"Create New Ticket"</h2>
                    <button class="close-button" on:click=move |_| ctx.close_overlay()>
                        "×"
                    </button>
                </div>

                <form class="create-ticket-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="error-message">{move || error.get()}</div>
                    </Show>

                    <div class="form-group">
                        <label for="category">"Category *"</label>
                        <select
                            id="category"
                            class="form-select"
                            on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                            disabled=move || loading.get()
                        >
                            {TICKET_CATEGORIES.iter().map(|&category| {
                                let selected = move || form.with(|f| f.category == category);
                                view! { <option value=category selected=selected>{category}</option> }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="title">"Title *"</label>
                        <input
                            id="title"
                            type="text"
                            class="form-input"
                            placeholder="Enter ticket title"
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="assignee">"Assignee *"</label>
                        <input
                            id="assignee"
                            type="text"
                            class="form-input"
                            placeholder="Enter assignee username"
                            prop:value=move || form.with(|f| f.assignee.clone())
                            on:input=move |ev| form.update(|f| f.assignee = event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="reporter">"Reporter"</label>
                        <input
                            id="reporter"
                            type="text"
                            class="form-input"
                            prop:value=move || form.with(|f| f.reporter.clone())
                            disabled=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="description">"Description *"</label>
                        <textarea
                            id="description"
                            class="form-textarea"
                            rows="6"
                            placeholder="Enter detailed description of the ticket"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            disabled=move || loading.get()
                        ></textarea>
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="create-button" disabled=move || loading.get()>
                            {move || if loading.get() { "Creating..." } else { "Create Ticket" }}
                        </button>
                        <button
                            type="button"
                            class="cancel-button"
                            on:click=move |_| ctx.close_overlay()
                            disabled=move || loading.get()
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
