//! Tix Core
//!
//! Everything the front-end does that is not rendering:
//! - models: Entities and request shapes exchanged with the host
//! - pipeline: Filter/search/sort over the ticket list
//! - session: Two-tier persistence of the logged-in user
//! - gateway: Contract for the remote command layer
//! - forms: Create validation and edit diffing
//! - controller: Screen/overlay state machine
//! - format: Date and badge display helpers
//! - config: Client settings and storage key names
//!
//! This crate has no WebAssembly dependencies so it can be tested natively.

pub mod config;
pub mod controller;
pub mod format;
pub mod forms;
pub mod gateway;
pub mod models;
pub mod pipeline;
pub mod session;

pub use config::{ClientConfig, ConfigError};
pub use controller::{AppController, AuthState, Overlay, Screen};
pub use format::{category_class, format_timestamp, status_class, DateStyle};
pub use forms::{submit_create, submit_update, CreateTicketForm, SubmitError, ValidationError};
pub use gateway::{CommandGateway, RemoteError};
pub use models::{
    CreateTicketRequest, LoginRequest, Ticket, UpdateTicketRequest, User, TICKET_CATEGORIES,
    TICKET_STATUSES,
};
pub use pipeline::{ListQuery, SortDirection, SortField, TicketFilters, TicketSort};
pub use session::{MemoryTier, SessionError, SessionPersistence, SessionStore, StorageTier, StoredSession};

#[cfg(test)]
pub(crate) mod fixtures;
