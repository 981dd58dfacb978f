//! Ticket List Pipeline
//!
//! Filter, search and sort over the fetched ticket list. Pure: the list view
//! re-runs it on every change of tickets or query.

use std::cmp::Ordering;

use crate::models::Ticket;

pub const NO_MATCH_MESSAGE: &str = "No tickets match your filters";
pub const NO_TICKETS_MESSAGE: &str = "No tickets found";

/// Exact-match filters; `None` means no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilters {
    pub category: Option<String>,
    pub status: Option<String>,
    pub assignee: Option<String>,
    pub reporter: Option<String>,
}

impl TicketFilters {
    /// True if at least one filter constrains the list
    pub fn is_active(&self) -> bool {
        [&self.category, &self.status, &self.assignee, &self.reporter]
            .into_iter()
            .any(|f| active(f).is_some())
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        field_matches(&self.category, &ticket.category)
            && field_matches(&self.status, &ticket.status)
            && field_matches(&self.assignee, &ticket.assignee)
            && field_matches(&self.reporter, &ticket.reporter)
    }
}

/// Filter value as set from a `<select>`: the empty option clears it
pub fn filter_value(raw: String) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

fn active(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|f| !f.is_empty())
}

fn field_matches(filter: &Option<String>, value: &str) -> bool {
    active(filter).map_or(true, |f| f == value)
}

/// Ticket field a list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Category,
    Title,
    Description,
    CreatedDate,
    Assignee,
    Reporter,
    Status,
    UpdatedAt,
}

impl SortField {
    fn key(self, ticket: &Ticket) -> &str {
        match self {
            SortField::Id => &ticket.id,
            SortField::Category => &ticket.category,
            SortField::Title => &ticket.title,
            SortField::Description => &ticket.description,
            // RFC 3339 timestamps from the host are zero-padded, so string
            // order is chronological order.
            SortField::CreatedDate => &ticket.created_date,
            SortField::Assignee => &ticket.assignee,
            SortField::Reporter => &ticket.reporter,
            SortField::Status => &ticket.status,
            SortField::UpdatedAt => &ticket.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for TicketSort {
    fn default() -> Self {
        Self {
            field: SortField::CreatedDate,
            direction: SortDirection::Desc,
        }
    }
}

impl TicketSort {
    /// Column header click: the current field flips asc -> desc, everything
    /// else starts ascending.
    pub fn toggled(self, field: SortField) -> Self {
        let direction = if self.field == field && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { field, direction }
    }

    /// Arrow shown next to a column header, if it is the sorted one
    pub fn indicator(self, field: SortField) -> &'static str {
        if self.field == field {
            self.direction.arrow()
        } else {
            ""
        }
    }

    fn compare(self, a: &Ticket, b: &Ticket) -> Ordering {
        let (a, b) = (self.field.key(a), self.field.key(b));
        match self.direction {
            SortDirection::Asc => a.cmp(b),
            SortDirection::Desc => b.cmp(a),
        }
    }
}

/// Everything the list view lets the user change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub filters: TicketFilters,
    pub sort: TicketSort,
}

impl ListQuery {
    pub fn is_narrowed(&self) -> bool {
        !self.search.is_empty() || self.filters.is_active()
    }

    fn matches_search(&self, ticket: &Ticket) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&ticket.title, &ticket.description, &ticket.category]
            .into_iter()
            .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.matches_search(ticket) && self.filters.matches(ticket)
    }

    /// Visible rows in display order
    pub fn apply(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        let mut visible: Vec<Ticket> = tickets
            .iter()
            .filter(|ticket| self.matches(ticket))
            .cloned()
            .collect();
        // sort_by is stable: equal keys keep their fetched order
        visible.sort_by(|a, b| self.sort.compare(a, b));
        visible
    }

    /// Message for an empty result
    pub fn empty_message(&self) -> &'static str {
        if self.is_narrowed() {
            NO_MATCH_MESSAGE
        } else {
            NO_TICKETS_MESSAGE
        }
    }
}
