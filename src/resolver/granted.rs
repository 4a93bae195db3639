use anyhow::Result;
use log::debug;

use crate::rules::Action;
use crate::subject::AuthorityAuthenticator;

use super::{AccessRequest, AccessResolver, AccessResponse};

/// Access resolution based on granted authorities.
///
/// Each action collapses to a single authority string (an optional prefix plus
/// the action name, for example `PERMISSION_READ`), checked by membership in
/// the subject's granted-authority set. Targets are ignored entirely, which
/// makes this strategy coarser than RBAC but free of any rule file.
pub struct GrantedAuthorityResolver {
    prefix: String,
    authn: Box<dyn AuthorityAuthenticator>,
}

impl GrantedAuthorityResolver {
    pub fn new(prefix: impl ToString, authn: Box<dyn AuthorityAuthenticator>) -> Self {
        Self {
            prefix: prefix.to_string(),
            authn,
        }
    }

    /// The authority string required for an action.
    pub fn authority_for(&self, action: Action) -> String {
        format!("{}{}", self.prefix, action)
    }
}

impl AccessResolver for GrantedAuthorityResolver {
    fn check_access(&self, req: &AccessRequest) -> Result<AccessResponse> {
        let authorities = self.authn.get_authorities(&req.subject)?;
        let required = self.authority_for(req.action);
        if authorities.contains(&required) {
            return Ok(AccessResponse::Ok);
        }

        debug!(
            "Subject '{}' lacks authority '{required}' for {}",
            req.subject.name, req.target
        );
        Ok(AccessResponse::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::TargetInformation;
    use crate::subject::{SubjectAuthorityAuthenticator, SubjectInfo};

    use super::*;

    fn request(subject: SubjectInfo, action: Action) -> AccessRequest {
        AccessRequest {
            action,
            target: TargetInformation::file("/secure/doc.txt"),
            subject,
        }
    }

    #[test]
    fn test_authority_membership() {
        let resolver =
            GrantedAuthorityResolver::new("", Box::new(SubjectAuthorityAuthenticator));
        let subject = SubjectInfo::new("alice").with_authorities(["READ"]);

        let result = resolver
            .check_access(&request(subject.clone(), Action::Read))
            .unwrap();
        assert!(matches!(result, AccessResponse::Ok));

        // The authority covers one action only
        let result = resolver
            .check_access(&request(subject, Action::Delete))
            .unwrap();
        assert!(matches!(result, AccessResponse::Unauthorized));
    }

    #[test]
    fn test_prefix() {
        let resolver =
            GrantedAuthorityResolver::new("PERMISSION_", Box::new(SubjectAuthorityAuthenticator));
        assert_eq!(resolver.authority_for(Action::Execute), "PERMISSION_EXECUTE");

        // Unprefixed authority no longer matches
        let subject = SubjectInfo::new("bob").with_authorities(["READ"]);
        let result = resolver.check_access(&request(subject, Action::Read)).unwrap();
        assert!(matches!(result, AccessResponse::Unauthorized));

        let subject = SubjectInfo::new("bob").with_authorities(["PERMISSION_READ"]);
        let result = resolver.check_access(&request(subject, Action::Read)).unwrap();
        assert!(matches!(result, AccessResponse::Ok));
    }

    #[test]
    fn test_empty_authorities_deny() {
        let resolver =
            GrantedAuthorityResolver::new("", Box::new(SubjectAuthorityAuthenticator));
        let result = resolver
            .check_access(&request(SubjectInfo::new("nobody"), Action::Read))
            .unwrap();
        assert!(matches!(result, AccessResponse::Unauthorized));
    }
}
