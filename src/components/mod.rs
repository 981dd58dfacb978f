//! UI Components
//!
//! Leptos components for the login screen, ticket list and overlays.

mod app_header;
mod create_ticket;
mod login;
mod ticket_detail;
mod ticket_list;

pub use app_header::AppHeader;
pub use create_ticket::CreateTicket;
pub use login::Login;
pub use ticket_detail::TicketDetail;
pub use ticket_list::TicketList;
