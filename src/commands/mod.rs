//! Tauri Command Wrappers
//!
//! Frontend bindings to the host's ticket commands, organized by domain.
//! A rejected `invoke` is turned into a [`RemoteError`] carrying the host's
//! message unchanged.

mod auth;
mod ticket;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tix_core::gateway::{CommandGateway, RemoteResult};
use tix_core::{CreateTicketRequest, LoginRequest, RemoteError, Ticket, UpdateTicketRequest, User};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// ========================
// Shared Argument Structs
// ========================

/// Commands taking a single `request` parameter
#[derive(Serialize)]
struct RequestArgs<'a, T> {
    request: &'a T,
}

fn to_args<A: Serialize>(args: &A) -> RemoteResult<JsValue> {
    serde_wasm_bindgen::to_value(args).map_err(|e| RemoteError::new(format!("Serialization error: {}", e)))
}

/// Whatever the host rejected with, as text
fn rejection_message(err: JsValue) -> RemoteError {
    if let Some(message) = err.as_string() {
        return RemoteError::new(message);
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return RemoteError::new(String::from(error.message()));
    }
    RemoteError::new(format!("{:?}", err))
}

/// Invoke `cmd` once and decode its result
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> RemoteResult<T> {
    log::debug!("invoke {}", cmd);
    let result = invoke(cmd, args).await.map_err(|err| {
        let err = rejection_message(err);
        log::warn!("{} failed: {}", cmd, err);
        err
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| RemoteError::new(format!("Response error: {}", e)))
}

// ========================
// Gateway
// ========================

/// [`CommandGateway`] backed by `window.__TAURI__.core.invoke`
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriGateway;

#[async_trait(?Send)]
impl CommandGateway for TauriGateway {
    async fn login(&self, request: &LoginRequest) -> RemoteResult<User> {
        auth::login(request).await
    }

    async fn list_tickets(&self) -> RemoteResult<Vec<Ticket>> {
        ticket::get_tickets().await
    }

    async fn get_ticket(&self, ticket_id: &str) -> RemoteResult<Ticket> {
        ticket::get_ticket_by_id(ticket_id).await
    }

    async fn create_ticket(&self, request: &CreateTicketRequest) -> RemoteResult<Ticket> {
        ticket::create_ticket(request).await
    }

    async fn update_ticket(&self, request: &UpdateTicketRequest) -> RemoteResult<Ticket> {
        ticket::update_ticket(request).await
    }
}
