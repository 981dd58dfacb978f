//! Command Gateway
//!
//! Contract for the host command layer. One call, one attempt: no retries,
//! no timeout, no local validation. Every failure is flattened to the
//! backend's message string.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CreateTicketRequest, LoginRequest, Ticket, UpdateTicketRequest, User};

/// Any failure reported by the remote command layer, message kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteError {
    pub message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for RemoteError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for RemoteError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Named remote operations exposed by the host
///
/// Futures are `?Send`: webview promises live on the single UI thread.
#[async_trait(?Send)]
pub trait CommandGateway {
    async fn login(&self, request: &LoginRequest) -> RemoteResult<User>;

    async fn list_tickets(&self) -> RemoteResult<Vec<Ticket>>;

    async fn get_ticket(&self, ticket_id: &str) -> RemoteResult<Ticket>;

    async fn create_ticket(&self, request: &CreateTicketRequest) -> RemoteResult<Ticket>;

    async fn update_ticket(&self, request: &UpdateTicketRequest) -> RemoteResult<Ticket>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_displays_message_verbatim() {
        let err = RemoteError::from("Invalid credentials");
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}
