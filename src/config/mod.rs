//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::session::{Profile, SessionInfo};

/// Environment variable prefix (ADMIN_SHELL_PORT, ADMIN_SHELL_SESSION__EMAIL, ...)
const ENV_PREFIX: &str = "ADMIN_SHELL";
/// Points at a config file (extension optional)
const CONFIG_PATH_VAR: &str = "ADMIN_SHELL_CONFIG";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub session: SessionConfig,
}

fn default_port() -> u16 {
    3000
}

/// Identity served by GET /api/session. Authentication itself is out of
/// scope; this stands in for whatever backs the auth collaborator.
#[derive(Debug, Default, Deserialize)]
pub struct SessionConfig {
    pub email: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub super_admin: bool,
}

impl SessionConfig {
    pub fn to_session_info(&self) -> SessionInfo {
        SessionInfo {
            profile: Some(Profile {
                email: self.email.clone(),
            }),
            permissions: self.permissions.clone(),
            super_admin: self.super_admin,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("port must be non-zero")]
    InvalidPort,
    #[error("session.permissions[{0}] is empty")]
    EmptyPermission(usize),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if let Some(index) = self
            .session
            .permissions
            .iter()
            .position(|p| p.trim().is_empty())
        {
            return Err(ConfigError::EmptyPermission(index));
        }
        Ok(())
    }
}

fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 3000)?
        // Load from config file if it exists
        .add_source(::config::File::with_name(&path.to_string_lossy()).required(false))
        // Override with environment variables
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("session.permissions")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = config.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    fn clear_env() {
        for (key, _) in std::env::vars() {
            if key.starts_with(ENV_PREFIX) {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("missing")).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.session.email.is_none());
        assert!(config.session.permissions.is_empty());
        assert!(!config.session.super_admin);
    }

    #[test]
    #[serial]
    fn test_loads_toml_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("admin.toml"),
            r#"
port = 8080

[session]
email = "ops@example.com"
permissions = ["read_users", "read_orders"]
"#,
        )
        .unwrap();

        let config = load_config_from(&dir.path().join("admin")).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.session.email.as_deref(), Some("ops@example.com"));
        assert_eq!(config.session.permissions, vec!["read_users", "read_orders"]);
        assert!(!config.session.super_admin);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("admin.toml"), "port = 8080\n").unwrap();

        std::env::set_var("ADMIN_SHELL_PORT", "9090");
        std::env::set_var("ADMIN_SHELL_SESSION__SUPER_ADMIN", "true");
        std::env::set_var("ADMIN_SHELL_SESSION__PERMISSIONS", "read_users,read_stock");
        let result = load_config_from(&dir.path().join("admin"));
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.port, 9090);
        assert!(config.session.super_admin);
        assert_eq!(config.session.permissions, vec!["read_users", "read_stock"]);
    }

    #[test]
    #[serial]
    fn test_rejects_empty_permission() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("admin.toml"),
            "[session]\npermissions = [\"read_users\", \"  \"]\n",
        )
        .unwrap();

        let err = load_config_from(&dir.path().join("admin")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::EmptyPermission(1))
        );
    }

    #[test]
    fn test_validate_port() {
        let config = Config {
            port: 0,
            session: SessionConfig::default(),
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidPort));
    }

    #[test]
    fn test_session_info_from_config() {
        let session = SessionConfig {
            email: None,
            permissions: vec!["read_users".to_string()],
            super_admin: false,
        };
        let info = session.to_session_info();
        assert_eq!(info.profile, Some(Profile { email: None }));
        assert_eq!(info.permissions, vec!["read_users"]);
    }
}
