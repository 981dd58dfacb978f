//! Ticket Forms
//!
//! Required-field checks for the create form and the per-field diff sent when
//! an edited ticket is saved.

use thiserror::Error;

use crate::gateway::{CommandGateway, RemoteError};
use crate::models::{CreateTicketRequest, Ticket, UpdateTicketRequest, User, TICKET_CATEGORIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Assignee is required")]
    AssigneeRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Create form contents; the reporter is always the logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicketForm {
    pub category: String,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub reporter: String,
}

impl CreateTicketForm {
    pub fn for_user(user: &User) -> Self {
        Self {
            category: TICKET_CATEGORIES[0].to_string(),
            title: String::new(),
            description: String::new(),
            assignee: String::new(),
            reporter: user.username.clone(),
        }
    }

    /// First missing required field wins. Values are sent as typed.
    pub fn validate(&self) -> Result<CreateTicketRequest, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::DescriptionRequired);
        }
        if self.assignee.trim().is_empty() {
            return Err(ValidationError::AssigneeRequired);
        }
        Ok(CreateTicketRequest {
            category: self.category.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            assignee: self.assignee.clone(),
            reporter: self.reporter.clone(),
        })
    }
}

fn changed(original: &str, edited: &str) -> Option<String> {
    (original != edited).then(|| edited.to_string())
}

/// Update carrying only the editable fields that differ from `original`
pub fn diff_ticket(original: &Ticket, draft: &Ticket) -> UpdateTicketRequest {
    UpdateTicketRequest {
        id: original.id.clone(),
        status: changed(&original.status, &draft.status),
        assignee: changed(&original.assignee, &draft.assignee),
        category: changed(&original.category, &draft.category),
        title: changed(&original.title, &draft.title),
        description: changed(&original.description, &draft.description),
    }
}

/// Validate then create. The gateway is not touched when validation fails.
pub async fn submit_create<G: CommandGateway + ?Sized>(
    gateway: &G,
    form: &CreateTicketForm,
) -> Result<Ticket, SubmitError> {
    let request = form.validate()?;
    let ticket = gateway.create_ticket(&request).await?;
    log::info!("created ticket {}", ticket.id);
    Ok(ticket)
}

/// Save an edited draft. Only changed fields are sent; an unchanged draft
/// still sends `{id}` so the host answers with the current record.
pub async fn submit_update<G: CommandGateway + ?Sized>(
    gateway: &G,
    original: &Ticket,
    draft: &Ticket,
) -> Result<Ticket, RemoteError> {
    let request = diff_ticket(original, draft);
    if request.is_empty() {
        log::debug!("ticket {} saved without changes", original.id);
    }
    let ticket = gateway.update_ticket(&request).await?;
    log::info!("updated ticket {}", ticket.id);
    Ok(ticket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{make_ticket, make_user, RecordingGateway};

    fn filled_form() -> CreateTicketForm {
        CreateTicketForm {
            title: "Printer on fire".to_string(),
            description: "Third floor".to_string(),
            assignee: "admin".to_string(),
            ..CreateTicketForm::for_user(&make_user("alice"))
        }
    }

    #[test]
    fn test_form_defaults() {
        let form = CreateTicketForm::for_user(&make_user("alice"));
        assert_eq!(form.category, "Bug");
        assert_eq!(form.reporter, "alice");
        assert!(form.title.is_empty());
    }

    #[test]
    fn test_validation_order() {
        let form = CreateTicketForm::for_user(&make_user("alice"));
        assert_eq!(form.validate(), Err(ValidationError::TitleRequired));

        let form = CreateTicketForm {
            title: "T".to_string(),
            description: "   ".to_string(),
            ..form
        };
        assert_eq!(form.validate(), Err(ValidationError::DescriptionRequired));

        let form = CreateTicketForm {
            description: "D".to_string(),
            ..form
        };
        assert_eq!(form.validate(), Err(ValidationError::AssigneeRequired));
        assert_eq!(
            ValidationError::AssigneeRequired.to_string(),
            "Assignee is required"
        );
    }

    #[test]
    fn test_validated_values_are_sent_as_typed() {
        let form = CreateTicketForm {
            title: "  padded  ".to_string(),
            ..filled_form()
        };
        let request = form.validate().unwrap();
        assert_eq!(request.title, "  padded  ");
        assert_eq!(request.reporter, "alice");
    }

    #[tokio::test]
    async fn test_missing_assignee_never_reaches_gateway() {
        let gateway = RecordingGateway::default();
        let form = CreateTicketForm {
            assignee: String::new(),
            ..filled_form()
        };

        let err = submit_create(&gateway, &form).await.unwrap_err();

        assert_eq!(err.to_string(), "Assignee is required");
        assert_eq!(err, SubmitError::Validation(ValidationError::AssigneeRequired));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_request() {
        let gateway = RecordingGateway::default();
        let ticket = submit_create(&gateway, &filled_form()).await.unwrap();

        assert_eq!(ticket.title, "Printer on fire");
        assert_eq!(ticket.status, "Open");
        assert_eq!(gateway.calls(), vec!["create_ticket".to_string()]);
    }

    #[tokio::test]
    async fn test_create_surfaces_remote_message() {
        let gateway = RecordingGateway::failing("database is locked");
        let err = submit_create(&gateway, &filled_form()).await.unwrap_err();
        assert_eq!(err.to_string(), "database is locked");
    }

    #[tokio::test]
    async fn test_status_only_update_sends_status_only() {
        let original = make_ticket("t-7", "Bug", "Crash on save", "Open");
        let gateway = RecordingGateway::with_tickets(vec![original.clone()]);
        let draft = Ticket {
            status: "Resolved".to_string(),
            ..original.clone()
        };

        let updated = submit_update(&gateway, &original, &draft).await.unwrap();

        assert_eq!(updated.status, "Resolved");
        assert_eq!(updated.title, "Crash on save");
        let sent = gateway.last_update().unwrap();
        assert_eq!(
            serde_json::to_value(&sent).unwrap(),
            serde_json::json!({ "id": "t-7", "status": "Resolved" })
        );
    }

    #[tokio::test]
    async fn test_unchanged_draft_sends_only_id() {
        let original = make_ticket("t-7", "Bug", "Crash on save", "Open");
        let gateway = RecordingGateway::with_tickets(vec![original.clone()]);

        let updated = submit_update(&gateway, &original, &original.clone()).await.unwrap();

        assert_eq!(updated, original);
        assert_eq!(gateway.calls(), vec!["update_ticket".to_string()]);
        let sent = gateway.last_update().unwrap();
        assert_eq!(
            serde_json::to_value(&sent).unwrap(),
            serde_json::json!({ "id": "t-7" })
        );
    }

    #[test]
    fn test_diff_covers_editable_fields_only() {
        let original = make_ticket("t-1", "Bug", "Old", "Open");
        let draft = Ticket {
            category: "Task".to_string(),
            title: "New".to_string(),
            description: "Rewritten".to_string(),
            assignee: "bob".to_string(),
            reporter: "mallory".to_string(),
            ..original.clone()
        };

        let request = diff_ticket(&original, &draft);
        assert_eq!(request.category.as_deref(), Some("Task"));
        assert_eq!(request.title.as_deref(), Some("New"));
        assert_eq!(request.description.as_deref(), Some("Rewritten"));
        assert_eq!(request.assignee.as_deref(), Some("bob"));
        assert_eq!(request.status, None);
    }
}
