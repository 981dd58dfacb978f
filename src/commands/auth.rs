//! Auth Commands
//!
//! Frontend binding for the host's `login` command.

use tix_core::gateway::RemoteResult;
use tix_core::{LoginRequest, User};

use super::{call, to_args, RequestArgs};

pub async fn login(request: &LoginRequest) -> RemoteResult<User> {
    let js_args = to_args(&RequestArgs { request })?;
    call("login", js_args).await
}
