use anyhow::Result;

use super::granted::GrantedAuthorityResolver;
use super::rbac::RbacResolver;
use super::{AccessRequest, AccessResolver, AccessResponse};

/// A union type that can hold the configured access-resolution strategy.
pub enum UnionResolver {
    /// Role-based resolution against a rule set
    Rbac(RbacResolver),
    /// Per-action granted-authority membership
    GrantedAuthority(GrantedAuthorityResolver),
    /// A strategy registered by name in the factory
    Custom(Box<dyn AccessResolver>),
}

impl AccessResolver for UnionResolver {
    fn check_access(&self, req: &AccessRequest) -> Result<AccessResponse> {
        match self {
            UnionResolver::Rbac(r) => r.check_access(req),
            UnionResolver::GrantedAuthority(g) => g.check_access(req),
            UnionResolver::Custom(c) => c.check_access(req),
        }
    }
}
