//! Test helpers shared by the unit tests in this crate.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::gateway::{CommandGateway, RemoteError, RemoteResult};
use crate::models::{CreateTicketRequest, LoginRequest, Ticket, UpdateTicketRequest, User};

pub fn make_user(username: &str) -> User {
    User {
        id: format!("u-{}", username),
        username: username.to_string(),
        password_hash: String::new(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

pub fn make_ticket(id: &str, category: &str, title: &str, status: &str) -> Ticket {
    Ticket {
        id: id.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        description: format!("{} details", title),
        created_date: "2024-01-01T00:00:00Z".to_string(),
        assignee: "admin".to_string(),
        reporter: "user1".to_string(),
        status: status.to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

/// Fake host that records every command it receives
#[derive(Default)]
pub struct RecordingGateway {
    calls: RefCell<Vec<String>>,
    updates: RefCell<Vec<UpdateTicketRequest>>,
    tickets: Vec<Ticket>,
    failure: Option<String>,
}

impl RecordingGateway {
    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn last_update(&self) -> Option<UpdateTicketRequest> {
        self.updates.borrow().last().cloned()
    }

    fn record(&self, command: &str) -> RemoteResult<()> {
        self.calls.borrow_mut().push(command.to_string());
        match &self.failure {
            Some(message) => Err(RemoteError::new(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl CommandGateway for RecordingGateway {
    async fn login(&self, request: &LoginRequest) -> RemoteResult<User> {
        self.record("login")?;
        Ok(make_user(&request.username))
    }

    async fn list_tickets(&self) -> RemoteResult<Vec<Ticket>> {
        self.record("get_tickets")?;
        Ok(self.tickets.clone())
    }

    async fn get_ticket(&self, ticket_id: &str) -> RemoteResult<Ticket> {
        self.record("get_ticket_by_id")?;
        self.tickets
            .iter()
            .find(|t| t.id == ticket_id)
            .cloned()
            .ok_or_else(|| RemoteError::new("Query returned no rows"))
    }

    async fn create_ticket(&self, request: &CreateTicketRequest) -> RemoteResult<Ticket> {
        self.record("create_ticket")?;
        Ok(Ticket {
            description: request.description.clone(),
            assignee: request.assignee.clone(),
            reporter: request.reporter.clone(),
            ..make_ticket("t-new", &request.category, &request.title, "Open")
        })
    }

    async fn update_ticket(&self, request: &UpdateTicketRequest) -> RemoteResult<Ticket> {
        self.record("update_ticket")?;
        self.updates.borrow_mut().push(request.clone());
        let mut ticket = self
            .tickets
            .iter()
            .find(|t| t.id == request.id)
            .cloned()
            .unwrap_or_else(|| make_ticket(&request.id, "Bug", "Ticket", "Open"));
        if let Some(status) = &request.status {
            ticket.status = status.clone();
        }
        if let Some(assignee) = &request.assignee {
            ticket.assignee = assignee.clone();
        }
        if let Some(category) = &request.category {
            ticket.category = category.clone();
        }
        if let Some(title) = &request.title {
            ticket.title = title.clone();
        }
        if let Some(description) = &request.description {
            ticket.description = description.clone();
        }
        Ok(ticket)
    }
}
