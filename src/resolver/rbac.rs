use anyhow::Result;
use log::debug;

use crate::rules::RuleSet;
use crate::subject::RoleAuthenticator;

use super::{AccessRequest, AccessResolver, AccessResponse};

/// Role-based access resolution backed by a static rule set.
///
/// Resolves the caller's roles through the configured authenticator and checks
/// each of them against the rule set; a single matching role grants access.
/// A subject with no roles is always denied.
pub struct RbacResolver {
    rules: RuleSet,
    authn: Box<dyn RoleAuthenticator>,
}

impl RbacResolver {
    pub fn new(rules: RuleSet, authn: Box<dyn RoleAuthenticator>) -> Self {
        Self { rules, authn }
    }
}

impl AccessResolver for RbacResolver {
    fn check_access(&self, req: &AccessRequest) -> Result<AccessResponse> {
        let roles = self.authn.get_roles(&req.subject)?;
        for role in roles {
            if self.rules.is_permitted(&role, req.action, &req.target) {
                return Ok(AccessResponse::Ok);
            }
        }

        debug!(
            "No role of '{}' permits {} on {}",
            req.subject.name, req.action, req.target
        );
        Ok(AccessResponse::Unauthorized)
    }
}
