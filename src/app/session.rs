//! Auth and permission contexts.
//!
//! `SessionProvider` wraps the router at the app root; components reach the
//! collaborators through `use_auth()` and `use_permissions()` instead of
//! any global state.

use dioxus::prelude::*;

use super::server_fns::{load_session, sign_out};
use crate::nav::PermissionCheck;
use crate::session::{display_email, PermissionSet, Profile, SessionInfo};

#[derive(Clone, Copy)]
struct SessionContext {
    profile: Signal<Option<Profile>>,
    permissions: Signal<PermissionSet>,
}

impl SessionContext {
    fn new(info: &SessionInfo) -> Self {
        Self {
            profile: Signal::new(info.profile.clone()),
            permissions: Signal::new(info.permission_set()),
        }
    }
}

/// Load the session through a server function, then install the contexts.
///
/// The future resolves during SSR, so the first render (server and
/// hydration alike) already sees the real permissions.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_server_future(move || async move { load_session().await })?;

    let info = match &*session.read() {
        Some(Ok(info)) => info.clone(),
        Some(Err(e)) => {
            tracing::warn!("Failed to load session: {}", e);
            SessionInfo::default()
        }
        None => SessionInfo::default(),
    };

    rsx! {
        SessionScope { session: info, {children} }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SessionScopeProps {
    /// Session the contexts start from
    pub session: SessionInfo,
    pub children: Element,
}

/// Install the auth and permission contexts for `children`.
/// Later changes to `session` are ignored; sign-out updates the contexts.
#[component]
pub fn SessionScope(props: SessionScopeProps) -> Element {
    use_context_provider(|| SessionContext::new(&props.session));

    rsx! {
        {props.children}
    }
}

/// Auth collaborator: current profile and sign-out.
#[derive(Clone, Copy)]
pub struct UseAuth {
    ctx: SessionContext,
}

impl UseAuth {
    pub fn profile(&self) -> Option<Profile> {
        self.ctx.profile.read().clone()
    }

    /// Email for display; empty when there is no profile.
    pub fn email(&self) -> String {
        display_email(self.ctx.profile.read().as_ref()).to_string()
    }

    /// Fire-and-forget; the local session is cleared immediately.
    pub fn sign_out(&self) {
        let mut profile = self.ctx.profile;
        let mut permissions = self.ctx.permissions;

        spawn(async move {
            if let Err(e) = sign_out().await {
                tracing::warn!("Sign-out request failed: {}", e);
            }
        });

        tracing::info!("Signed out");
        profile.set(None);
        permissions.set(PermissionSet::default());
    }
}

/// Permission collaborator.
#[derive(Clone, Copy)]
pub struct UsePermissions {
    ctx: SessionContext,
}

impl PermissionCheck for UsePermissions {
    fn has_permission(&self, name: &str) -> bool {
        self.ctx.permissions.read().has_permission(name)
    }

    fn is_super_admin(&self) -> bool {
        self.ctx.permissions.read().is_super_admin()
    }
}

pub fn use_auth() -> UseAuth {
    UseAuth {
        ctx: use_context::<SessionContext>(),
    }
}

pub fn use_permissions() -> UsePermissions {
    UsePermissions {
        ctx: use_context::<SessionContext>(),
    }
}
