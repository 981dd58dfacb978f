//! Ticket Commands
//!
//! Frontend bindings for ticket-related backend commands.

use serde::Serialize;
use tix_core::gateway::RemoteResult;
use tix_core::{CreateTicketRequest, Ticket, UpdateTicketRequest};
use wasm_bindgen::prelude::*;

use super::{call, to_args, RequestArgs};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct TicketIdArgs<'a> {
    #[serde(rename = "ticketId")]
    ticket_id: &'a str,
}

// ========================
// Commands
// ========================

pub async fn get_tickets() -> RemoteResult<Vec<Ticket>> {
    call("get_tickets", JsValue::NULL).await
}

pub async fn get_ticket_by_id(ticket_id: &str) -> RemoteResult<Ticket> {
    let js_args = to_args(&TicketIdArgs { ticket_id })?;
    call("get_ticket_by_id", js_args).await
}

pub async fn create_ticket(request: &CreateTicketRequest) -> RemoteResult<Ticket> {
    let js_args = to_args(&RequestArgs { request })?;
    call("create_ticket", js_args).await
}

/// Only the fields set on `request` are sent; the host leaves the rest alone
pub async fn update_ticket(request: &UpdateTicketRequest) -> RemoteResult<Ticket> {
    let js_args = to_args(&RequestArgs { request })?;
    call("update_ticket", js_args).await
}
