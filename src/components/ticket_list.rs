//! Ticket List Component
//!
//! Searchable, filterable, sortable table of all tickets. Re-fetches the whole
//! list every time the app's refresh counter moves.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tix_core::gateway::CommandGateway;
use tix_core::{category_class, format_timestamp, status_class, DateStyle, SortField, Ticket};
use tix_core::{TICKET_CATEGORIES, TICKET_STATUSES};

use crate::commands::TauriGateway;
use crate::context::use_app_context;
use crate::store::{
    store_begin_load, store_finish_load, store_set_category_filter, store_set_search,
    store_set_status_filter, store_toggle_sort, TicketListState, TicketListStateStoreFields,
};

/// Sortable columns in display order
const COLUMNS: &[(SortField, &str)] = &[
    (SortField::Category, "Category"),
    (SortField::Title, "Title"),
    (SortField::CreatedDate, "Created"),
    (SortField::Assignee, "Assignee"),
    (SortField::Reporter, "Reporter"),
    (SortField::Status, "Status"),
];

#[component]
pub fn TicketList() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(TicketListState::new());

    // Load tickets on mount and whenever the refresh counter changes
    Effect::new(move |_| {
        let trigger = ctx.refresh_count();
        log::debug!("loading tickets, trigger={}", trigger);
        store_begin_load(&store);
        spawn_local(async move {
            let result = TauriGateway.list_tickets().await;
            store_finish_load(&store, result);
        });
    });

    let visible = Memo::new(move |_| {
        let tickets = store.tickets().read();
        store.query().read().apply(&tickets)
    });

    let header = move || {
        COLUMNS
            .iter()
            .map(|&(field, label)| {
                let indicator = move || store.query().read().sort.indicator(field);
                view! {
                    <th class="sortable" on:click=move |_| store_toggle_sort(&store, field)>
                        {label} " " {indicator}
                    </th>
                }
            })
            .collect_view()
    };

    let table = move || {
        view! {
            <div class="ticket-list-container">
                <div class="ticket-list-header">
                    <h2>"Tickets"</h2>
                    <button class="create-button" on:click=move |_| ctx.open_create()>
                        "Create Ticket"
                    </button>
                </div>

                <div class="filters-section">
                    <div class="search-box">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search tickets..."
                            prop:value=move || store.query().read().search.clone()
                            on:input=move |ev| store_set_search(&store, event_target_value(&ev))
                        />
                    </div>

                    <div class="filters">
                        <select
                            class="filter-select"
                            on:change=move |ev| store_set_category_filter(&store, event_target_value(&ev))
                        >
                            <option value="">"All Categories"</option>
                            {TICKET_CATEGORIES.iter().map(|&category| {
                                let selected = move || store.query().read().filters.category.as_deref() == Some(category);
                                view! { <option value=category selected=selected>{category}</option> }
                            }).collect_view()}
                        </select>

                        <select
                            class="filter-select"
                            on:change=move |ev| store_set_status_filter(&store, event_target_value(&ev))
                        >
                            <option value="">"All Statuses"</option>
                            {TICKET_STATUSES.iter().map(|&status| {
                                let selected = move || store.query().read().filters.status.as_deref() == Some(status);
                                view! { <option value=status selected=selected>{status}</option> }
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="ticket-table-container">
                    <table class="ticket-table">
                        <thead>
                            <tr>{header}</tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || visible.get()
                                key=|ticket| ticket.id.clone()
                                children=move |ticket| view! { <TicketRow ticket=ticket /> }
                            />
                        </tbody>
                    </table>

                    <Show when=move || visible.with(|v| v.is_empty())>
                        <div class="no-tickets">{move || store.query().read().empty_message()}</div>
                    </Show>
                </div>
            </div>
        }
    };

    move || {
        if *store.loading().read() {
            view! { <div class="loading">"Loading tickets..."</div> }.into_any()
        } else if let Some(error) = (*store.error().read()).clone() {
            view! { <div class="error">"Error: " {error}</div> }.into_any()
        } else {
            table().into_any()
        }
    }
}

/// One clickable table row
#[component]
fn TicketRow(ticket: Ticket) -> impl IntoView {
    let ctx = use_app_context();
    let category_badge = format!("category-badge {}", category_class(&ticket.category));
    let status_badge = format!("status-badge {}", status_class(&ticket.status));
    let created = format_timestamp(&ticket.created_date, DateStyle::Short);
    let clicked = ticket.clone();

    view! {
        <tr class="ticket-row" on:click=move |_| ctx.select(clicked.clone())>
            <td class="category-cell">
                <span class=category_badge>{ticket.category.clone()}</span>
            </td>
            <td class="title-cell">{ticket.title.clone()}</td>
            <td class="date-cell">{created}</td>
            <td class="assignee-cell">{ticket.assignee.clone()}</td>
            <td class="reporter-cell">{ticket.reporter.clone()}</td>
            <td class="status-cell">
                <span class=status_badge>{ticket.status.clone()}</span>
            </td>
        </tr>
    }
}
