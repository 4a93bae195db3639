use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use log::{info, warn};

use crate::config::{AuthzConfig, Strategy};
use crate::rules::RuleSet;
use crate::subject::{
    AuthorityAuthenticator, RoleAuthenticator, SubjectAuthorityAuthenticator,
    SubjectRoleAuthenticator,
};

use super::granted::GrantedAuthorityResolver;
use super::rbac::RbacResolver;
use super::union::UnionResolver;
use super::AccessResolver;

type CustomBuilder = Box<dyn Fn(&AuthzConfig) -> Result<Box<dyn AccessResolver>>>;

/// Builds the access resolver selected by configuration.
///
/// Authenticators default to reading the subject fields filled in by the
/// authentication layer and can be overridden per deployment. Custom
/// strategies are registered by name up front, so strategy selection is a
/// plain table lookup at startup with no runtime reflection.
pub struct AuthzFactory {
    role_authn: Option<Box<dyn RoleAuthenticator>>,
    authority_authn: Option<Box<dyn AuthorityAuthenticator>>,
    custom: HashMap<String, CustomBuilder>,
}

impl AuthzFactory {
    pub fn new() -> Self {
        Self {
            role_authn: None,
            authority_authn: None,
            custom: HashMap::new(),
        }
    }

    /// Replaces the default role authenticator used by the simple_rbac
    /// strategy.
    pub fn with_role_authenticator(mut self, authn: Box<dyn RoleAuthenticator>) -> Self {
        self.role_authn = Some(authn);
        self
    }

    /// Replaces the default authority authenticator used by the
    /// granted_authority strategy.
    pub fn with_authority_authenticator(mut self, authn: Box<dyn AuthorityAuthenticator>) -> Self {
        self.authority_authn = Some(authn);
        self
    }

    /// Registers a custom strategy under a name referable from configuration.
    pub fn register_custom<F>(mut self, name: impl ToString, builder: F) -> Self
    where
        F: Fn(&AuthzConfig) -> Result<Box<dyn AccessResolver>> + 'static,
    {
        self.custom.insert(name.to_string(), Box::new(builder));
        self
    }

    /// Builds the configured resolver.
    ///
    /// Returns `None` when authorization is disabled. Any configuration
    /// problem (missing or malformed rules file, unregistered custom name) is
    /// an error; the caller must abort startup rather than continue without
    /// the intended checks.
    pub fn build_resolver(self, cfg: &AuthzConfig) -> Result<Option<UnionResolver>> {
        if !cfg.enabled {
            info!("Authorization is disabled");
            return Ok(None);
        }

        let resolver = match cfg.strategy {
            Strategy::SimpleRbac => {
                let rules =
                    RuleSet::load_file(&cfg.rules_path).context("load authorization rules")?;
                if rules.is_empty() {
                    warn!(
                        "Rule set at '{}' is empty, every request will be denied",
                        cfg.rules_path
                    );
                } else {
                    info!("Loaded {} authorization rules", rules.len());
                }
                let authn = self
                    .role_authn
                    .unwrap_or_else(|| Box::new(SubjectRoleAuthenticator));
                UnionResolver::Rbac(RbacResolver::new(rules, authn))
            }
            Strategy::GrantedAuthority => {
                let authn = self
                    .authority_authn
                    .unwrap_or_else(|| Box::new(SubjectAuthorityAuthenticator));
                UnionResolver::GrantedAuthority(GrantedAuthorityResolver::new(
                    &cfg.authority_prefix,
                    authn,
                ))
            }
            Strategy::Custom => match self.custom.get(&cfg.custom_name) {
                Some(builder) => {
                    let resolver = builder(cfg)
                        .with_context(|| format!("build custom strategy '{}'", cfg.custom_name))?;
                    UnionResolver::Custom(resolver)
                }
                None => bail!("unknown custom authorization strategy '{}'", cfg.custom_name),
            },
        };

        Ok(Some(resolver))
    }
}

impl Default for AuthzFactory {
    fn default() -> Self {
        Self::new()
    }
}
