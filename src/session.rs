//! Session data exchanged between the server and the UI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::nav::PermissionCheck;

/// Account details shown in the shell footer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub email: Option<String>,
}

/// Email to display for an optional profile; empty when unknown.
pub fn display_email(profile: Option<&Profile>) -> &str {
    profile.and_then(|p| p.email.as_deref()).unwrap_or("")
}

/// GET /api/session response
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub super_admin: bool,
}

impl SessionInfo {
    pub fn permission_set(&self) -> PermissionSet {
        PermissionSet::new(self.permissions.iter().map(String::as_str), self.super_admin)
    }
}

/// Granted permission names plus the super-admin flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionSet {
    granted: BTreeSet<String>,
    super_admin: bool,
}

impl PermissionSet {
    pub fn new<I, S>(names: I, super_admin: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: names.into_iter().map(Into::into).collect(),
            super_admin,
        }
    }

    pub fn len(&self) -> usize {
        self.granted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }
}

impl PermissionCheck for PermissionSet {
    fn has_permission(&self, name: &str) -> bool {
        self.granted.contains(name)
    }

    fn is_super_admin(&self) -> bool {
        self.super_admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_profile_displays_empty() {
        assert_eq!(display_email(None), "");
        assert_eq!(display_email(Some(&Profile { email: None })), "");
        let p = Profile {
            email: Some("ops@example.com".to_string()),
        };
        assert_eq!(display_email(Some(&p)), "ops@example.com");
    }

    #[test]
    fn test_session_info_defaults_when_fields_missing() {
        let info: SessionInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info, SessionInfo::default());
        assert!(info.profile.is_none());
        assert!(!info.permission_set().is_super_admin());
    }

    #[test]
    fn test_session_info_json_shape() {
        let json = r#"{
            "profile": {"email": "root@example.com"},
            "permissions": ["read_users", "read_orders"],
            "super_admin": true
        }"#;
        let info: SessionInfo = serde_json::from_str(json).unwrap();
        let perms = info.permission_set();
        assert!(perms.has_permission("read_users"));
        assert!(perms.has_permission("read_orders"));
        assert!(!perms.has_permission("read_products"));
        assert!(perms.is_super_admin());
        assert_eq!(perms.len(), 2);
    }

    #[test]
    fn test_permission_names_are_exact() {
        let perms = PermissionSet::new(["read_users"], false);
        assert!(!perms.has_permission("read_user"));
        assert!(!perms.has_permission("READ_USERS"));
    }
}
