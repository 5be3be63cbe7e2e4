//! Configuration loading from blog.toml.

use blog::Actor;
use content::{Role, User};
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Accounts available to the driver.
    #[serde(default = "default_users")]
    pub users: Vec<Account>,
}

/// A user together with the role it acts in.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub user: User,
    pub role: Role,
}

fn default_users() -> Vec<Account> {
    vec![
        Account {
            user: User::new("Admin User", "admin@blog.com", "adminpass"),
            role: Role::Administrator,
        },
        Account {
            user: User::new("Author User", "author@blog.com", "authorpass"),
            role: Role::Author,
        },
    ]
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Create a default configuration.
    pub fn default_config() -> Self {
        Self {
            users: default_users(),
        }
    }

    /// The first configured account with the given role, as an actor.
    pub fn actor(&self, role: Role) -> Result<Actor, ConfigError> {
        self.users
            .iter()
            .find(|account| account.role == role)
            .map(|account| Actor::new(account.user.clone(), role))
            .ok_or(ConfigError::MissingRole(role))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("no {0} account configured")]
    MissingRole(Role),
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog::PostManager;

    #[test]
    fn test_default_config_has_both_roles() {
        let config = Config::default_config();
        let admin = config.actor(Role::Administrator).unwrap();
        let author = config.actor(Role::Author).unwrap();
        assert_eq!(admin.user().name, "Admin User");
        assert_eq!(author.user().name, "Author User");
    }

    #[test]
    fn test_parse_users() {
        let toml = r#"
[[users]]
name = "Jane"
email = "jane@blog.com"
password = "secret"
role = "author"
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.users.len(), 1);
        assert_eq!(config.users[0].user.password(), "secret");
        assert!(matches!(
            config.actor(Role::Administrator),
            Err(ConfigError::MissingRole(Role::Administrator))
        ));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.users.len(), 2);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Config::parse("users = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_role_tables_rejected() {
        let toml = r#"
[author]
own_posts_only = false
"#;
        assert!(matches!(Config::parse(toml), Err(ConfigError::Parse(_))));
    }
}
