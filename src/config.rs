use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Authorization related configuration.
///
/// Usually embedded in the server configuration; [`AuthzConfig::load`] reads a
/// standalone TOML file for deployments that keep it separate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Whether authorization is enabled. When disabled, resources are served
    /// without any access check. Defaults to false.
    #[serde(default = "AuthzConfig::default_enabled")]
    pub enabled: bool,

    /// The access-resolution strategy. Defaults to simple_rbac.
    #[serde(default = "AuthzConfig::default_strategy")]
    pub strategy: Strategy,

    /// Path to the JSON rules file. Required by the simple_rbac strategy.
    /// Defaults to empty.
    #[serde(default = "AuthzConfig::default_rules_path")]
    pub rules_path: String,

    /// Prefix prepended to action names to form authority strings for the
    /// granted_authority strategy. Defaults to empty.
    #[serde(default = "AuthzConfig::default_authority_prefix")]
    pub authority_prefix: String,

    /// Name of the registered strategy to use when strategy is custom.
    /// Defaults to empty.
    #[serde(default = "AuthzConfig::default_custom_name")]
    pub custom_name: String,
}

/// Selects how access checks are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Role-based rules loaded from a file
    SimpleRbac,
    /// Per-action granted-authority membership
    GrantedAuthority,
    /// A strategy registered by name in the factory
    Custom,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            strategy: Self::default_strategy(),
            rules_path: Self::default_rules_path(),
            authority_prefix: Self::default_authority_prefix(),
            custom_name: Self::default_custom_name(),
        }
    }
}

impl AuthzConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read authz config file: {}", path.display()))?;
        let mut cfg: Self = toml::from_str(&data).context("parse authz config toml")?;
        cfg.complete().context("validate authz config")?;
        Ok(cfg)
    }

    /// Validates the configuration. Must be called before building any
    /// resolver from it.
    pub fn complete(&mut self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        match self.strategy {
            Strategy::SimpleRbac => {
                if self.rules_path.is_empty() {
                    bail!("rules_path cannot be empty for the simple_rbac strategy");
                }
            }
            Strategy::GrantedAuthority => {}
            Strategy::Custom => {
                if self.custom_name.is_empty() {
                    bail!("custom_name cannot be empty for the custom strategy");
                }
            }
        }

        Ok(())
    }

    pub fn default_enabled() -> bool {
        false
    }

    pub fn default_strategy() -> Strategy {
        Strategy::SimpleRbac
    }

    pub fn default_rules_path() -> String {
        String::new()
    }

    pub fn default_authority_prefix() -> String {
        String::new()
    }

    pub fn default_custom_name() -> String {
        String::new()
    }
}
