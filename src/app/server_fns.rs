//! Server functions for the session.
//! They run on the server during SSR and are called over HTTP after hydration.

use dioxus::prelude::*;

use crate::session::SessionInfo;

/// Profile and permissions from the server configuration.
#[server]
pub async fn load_session() -> Result<SessionInfo, ServerFnError> {
    let info = crate::api::current_session()
        .ok_or_else(|| ServerFnError::new("session state is not installed"))?;
    tracing::debug!(
        permissions = info.permissions.len(),
        super_admin = info.super_admin,
        "Session served"
    );
    Ok(info)
}

/// Record a sign-out for the configured account.
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    let email = crate::api::current_session()
        .and_then(|info| info.profile)
        .and_then(|profile| profile.email);
    tracing::info!(?email, "Sign-out requested");
    Ok(())
}
