//! Client configuration
//!
//! Loaded from TOML on native targets; the web frontend starts from
//! [`AppConfig::default`] and applies the compile-time endpoint override.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::navigation::SelectedUserId;
use crate::views::UserId;

/// Environment variable overriding the GraphQL endpoint.
pub const ENDPOINT_ENV: &str = "POSTBOARD_GRAPHQL_URL";

/// What the feed does after a successful create or delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfterMutation {
    /// Re-issue the combined read for the current selection.
    #[default]
    Refetch,
    /// Reload the whole document.
    Reload,
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GraphQL endpoint URL
    pub graphql_endpoint: String,
    /// Query parameter holding the selected user
    pub user_param: String,
    /// Selection used when the parameter is absent or malformed
    pub default_user_id: String,
    /// Users offered by the switcher, in display order
    pub switchable_users: Vec<String>,
    /// Resync strategy after mutations
    pub after_mutation: AfterMutation,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: "http://localhost:4000/graphql".to_string(),
            user_param: "userId".to_string(),
            default_user_id: "1".to_string(),
            switchable_users: vec!["1".to_string(), "2".to_string()],
            after_mutation: AfterMutation::Refetch,
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> AppResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| AppError::Config(format!("invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. A missing file yields the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> AppResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(source) => Self::from_toml_str(&source),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(AppError::Config(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Apply the endpoint override, if set.
    pub fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.graphql_endpoint = endpoint.to_string();
        }
        self
    }

    /// Apply [`ENDPOINT_ENV`] from the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_env_overrides(self) -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV).ok();
        self.with_endpoint_override(endpoint.as_deref())
    }

    /// Check every field.
    pub fn validate(&self) -> AppResult<()> {
        let endpoint = url::Url::parse(&self.graphql_endpoint).map_err(|e| {
            AppError::Config(format!(
                "graphql_endpoint {:?} is not a URL: {e}",
                self.graphql_endpoint
            ))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "graphql_endpoint must use http or https, got {}",
                endpoint.scheme()
            )));
        }
        if self.user_param.trim().is_empty() {
            return Err(AppError::Config("user_param must not be empty".into()));
        }
        if !SelectedUserId::is_well_formed(&self.default_user_id) {
            return Err(AppError::Config(format!(
                "default_user_id {:?} is not a user id",
                self.default_user_id
            )));
        }
        if let Some(bad) = self
            .switchable_users
            .iter()
            .find(|id| !SelectedUserId::is_well_formed(id))
        {
            return Err(AppError::Config(format!(
                "switchable user {bad:?} is not a user id"
            )));
        }
        Ok(())
    }

    /// Default selection as a typed value.
    pub fn default_selection(&self) -> SelectedUserId {
        SelectedUserId::resolve(Some(&self.default_user_id), &SelectedUserId::default())
    }

    /// Switchable users as typed ids.
    pub fn switchable_user_ids(&self) -> Vec<UserId> {
        self.switchable_users.iter().map(UserId::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_original_deployment() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_selection().as_str(), "1");
        assert_eq!(config.switchable_users, vec!["1", "2"]);
        assert_eq!(config.after_mutation, AfterMutation::Refetch);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            graphql_endpoint = "https://api.example.com/graphql"
            after_mutation = "reload"
            "#,
        )
        .unwrap();
        assert_eq!(config.graphql_endpoint, "https://api.example.com/graphql");
        assert_eq!(config.after_mutation, AfterMutation::Reload);
        assert_eq!(config.user_param, "userId");
    }

    #[test]
    fn rejects_bad_values() {
        let err = AppConfig::from_toml_str(r#"graphql_endpoint = "ftp://x/graphql""#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = AppConfig::from_toml_str(r#"switchable_users = ["1", "two"]"#).unwrap_err();
        assert!(err.to_string().contains("two"));

        let err = AppConfig::from_toml_str("default_user_id = \"\"").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn endpoint_override_ignores_blank() {
        let config = AppConfig::default().with_endpoint_override(Some("  "));
        assert_eq!(config.graphql_endpoint, AppConfig::default().graphql_endpoint);

        let config = AppConfig::default().with_endpoint_override(Some("http://h:9/graphql"));
        assert_eq!(config.graphql_endpoint, "http://h:9/graphql");
    }

    #[test]
    fn load_reads_file_or_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert_eq!(AppConfig::load(&missing).unwrap(), AppConfig::default());

        let path = dir.path().join("postboard.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "switchable_users = [\"1\", \"2\", \"3\"]").unwrap();
        assert_eq!(AppConfig::load(&path).unwrap().switchable_users.len(), 3);
    }
}
