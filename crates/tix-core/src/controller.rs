//! View Controller
//!
//! Which screen is showing, who is logged in, which overlay is open and when
//! the ticket list must be re-fetched. All view state changes go through the
//! transitions on [`AppController`].

use crate::gateway::{CommandGateway, RemoteError};
use crate::models::{LoginRequest, Ticket, User};
use crate::session::SessionPersistence;

/// Logged-in user, if any. Authenticated exactly when `user` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
    remember_me: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }
}

/// Modal layer above the ticket list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    Detail(Ticket),
    Create,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    LoggedOut,
    LoggedIn,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppController {
    auth: AuthState,
    overlay: Overlay,
    refresh: u32,
}

impl AppController {
    /// Start from whatever session survived in storage
    pub fn restore(session: &impl SessionPersistence) -> Self {
        let stored = session.get();
        if let Some(user) = &stored.user {
            log::info!("restored session for {}", user.username);
        }
        Self {
            auth: AuthState {
                remember_me: stored.user.is_some() && stored.remember_me,
                user: stored.user,
            },
            ..Default::default()
        }
    }

    pub fn screen(&self) -> Screen {
        if self.auth.is_authenticated() {
            Screen::LoggedIn
        } else {
            Screen::LoggedOut
        }
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn selected(&self) -> Option<&Ticket> {
        match &self.overlay {
            Overlay::Detail(ticket) => Some(ticket),
            _ => None,
        }
    }

    pub fn refresh_count(&self) -> u32 {
        self.refresh
    }

    /// Successful login: persist the session and show the ticket list.
    /// A storage failure only costs the user a re-login after restart.
    pub fn logged_in(&mut self, user: User, remember_me: bool, session: &impl SessionPersistence) {
        if let Err(e) = session.put(&user, remember_me) {
            log::warn!("could not persist session: {}", e);
        }
        log::info!("logged in as {}", user.username);
        self.auth = AuthState {
            user: Some(user),
            remember_me,
        };
        self.overlay = Overlay::None;
    }

    pub fn logout(&mut self, session: &impl SessionPersistence) {
        session.clear();
        if let Some(user) = self.auth.user() {
            log::info!("logged out {}", user.username);
        }
        self.auth = AuthState::default();
        self.overlay = Overlay::None;
    }

    pub fn select(&mut self, ticket: Ticket) {
        if self.auth.is_authenticated() {
            self.overlay = Overlay::Detail(ticket);
        }
    }

    pub fn open_create(&mut self) {
        if self.auth.is_authenticated() {
            self.overlay = Overlay::Create;
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Request a full re-fetch of the ticket list
    pub fn refresh(&mut self) {
        self.refresh = self.refresh.wrapping_add(1);
    }

    pub fn ticket_created(&mut self) {
        self.refresh();
        if self.overlay == Overlay::Create {
            self.overlay = Overlay::None;
        }
    }

    pub fn ticket_updated(&mut self) {
        self.refresh();
        if matches!(self.overlay, Overlay::Detail(_)) {
            self.overlay = Overlay::None;
        }
    }
}

/// Call the host's `login`; on success the caller applies
/// [`AppController::logged_in`] with the returned user.
pub async fn login<G: CommandGateway + ?Sized>(
    gateway: &G,
    request: &LoginRequest,
) -> Result<User, RemoteError> {
    log::debug!("login attempt for {}", request.username);
    gateway.login(request).await
}
