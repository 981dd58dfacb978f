//! Models
//!
//! Data structures matching the host's entities and command payloads.

use serde::{Deserialize, Serialize};

/// Status values offered by the UI
pub const TICKET_STATUSES: &[&str] = &["Open", "In Progress", "Closed", "Resolved"];

/// Category values offered by the UI
pub const TICKET_CATEGORIES: &[&str] = &["Bug", "Feature", "Enhancement", "Task", "Support"];

/// Authenticated user (matches backend)
///
/// `password_hash` comes back empty from the host and is never shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
}

/// Ticket data structure (matches backend)
///
/// `category` and `status` stay plain strings: the host accepts any value,
/// only the UI restricts them to [`TICKET_CATEGORIES`] / [`TICKET_STATUSES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub created_date: String,
    pub assignee: String,
    pub reporter: String,
    pub status: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTicketRequest {
    pub category: String,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub reporter: String,
}

/// Partial update; `None` fields are left out of the payload entirely
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTicketRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateTicketRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// True when no field besides `id` would be sent
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.assignee.is_none()
            && self.category.is_none()
            && self.title.is_none()
            && self.description.is_none()
    }
}
