//! Ticket List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: typing in the
//! search box only touches `query`, a re-fetch only touches `tickets`.

use leptos::prelude::*;
use reactive_stores::Store;
use tix_core::pipeline::filter_value;
use tix_core::{ListQuery, RemoteError, SortField, Ticket};

/// State behind the ticket list view
#[derive(Clone, Debug, Default, Store)]
pub struct TicketListState {
    /// Last fetched tickets, in host order
    pub tickets: Vec<Ticket>,
    /// Fetch in flight
    pub loading: bool,
    /// Message of the last failed fetch
    pub error: Option<String>,
    /// Search text, filters and sort
    pub query: ListQuery,
}

impl TicketListState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TicketStore = Store<TicketListState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_begin_load(store: &TicketStore) {
    *store.loading().write() = true;
}

/// Apply a fetch result; ignored if the list view is already gone
pub fn store_finish_load(store: &TicketStore, result: Result<Vec<Ticket>, RemoteError>) {
    if store.is_disposed() {
        return;
    }
    match result {
        Ok(tickets) => {
            log::debug!("loaded {} tickets", tickets.len());
            *store.tickets().write() = tickets;
            *store.error().write() = None;
        }
        Err(e) => *store.error().write() = Some(e.message),
    }
    *store.loading().write() = false;
}

pub fn store_set_search(store: &TicketStore, search: String) {
    store.query().write().search = search;
}

pub fn store_set_category_filter(store: &TicketStore, raw: String) {
    store.query().write().filters.category = filter_value(raw);
}

pub fn store_set_status_filter(store: &TicketStore, raw: String) {
    store.query().write().filters.status = filter_value(raw);
}

/// Column header click
pub fn store_toggle_sort(store: &TicketStore, field: SortField) {
    let query = store.query();
    let mut query = query.write();
    query.sort = query.sort.toggled(field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tix_core::SortDirection;

    #[test]
    fn test_header_clicks_update_sort() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(TicketListState::new());

        store_toggle_sort(&store, SortField::Title);
        let sort = store.query().read().sort;
        assert_eq!(sort.field, SortField::Title);
        assert_eq!(sort.direction, SortDirection::Asc);

        store_toggle_sort(&store, SortField::Title);
        assert_eq!(store.query().read().sort.direction, SortDirection::Desc);

        store_set_status_filter(&store, "Closed".to_string());
        store_set_status_filter(&store, String::new());
        assert_eq!(store.query().read().filters.status, None);
    }
}
