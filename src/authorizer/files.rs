use std::sync::Arc;

use crate::resolver::UnionResolver;
use crate::rules::{Action, TargetInformation};
use crate::subject::SubjectInfo;

use super::{enforce, AuthzError};

/// Authorization checks for file downloads and uploads.
pub struct FilesAuthorizer {
    resolver: Arc<UnionResolver>,
}

impl FilesAuthorizer {
    pub fn new(resolver: Arc<UnionResolver>) -> Self {
        Self { resolver }
    }

    pub fn enforce_download_file(
        &self,
        subject: &SubjectInfo,
        path: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Read,
            TargetInformation::file(path),
        )
    }

    pub fn enforce_upload_file(
        &self,
        subject: &SubjectInfo,
        path: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Create,
            TargetInformation::file(path),
        )
    }

    pub fn enforce_delete_file(
        &self,
        subject: &SubjectInfo,
        path: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Delete,
            TargetInformation::file(path),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::resolver::RbacResolver;
    use crate::rules::{Rule, RuleSet};
    use crate::subject::SubjectRoleAuthenticator;

    use super::*;

    #[test]
    fn test_path_exact_match() {
        let rules: Vec<Rule> = serde_json::from_str(
            r#"[{"role": "fileReader", "action": "READ",
                 "targetInformation": {"type": "path", "path": "/secure/doc.txt"}}]"#,
        )
        .unwrap();
        let resolver = Arc::new(UnionResolver::Rbac(RbacResolver::new(
            RuleSet::new(rules),
            Box::new(SubjectRoleAuthenticator),
        )));
        let authorizer = FilesAuthorizer::new(resolver);

        let reader = SubjectInfo::new("alice").with_roles(["fileReader"]);
        authorizer
            .enforce_download_file(&reader, "/secure/doc.txt")
            .unwrap();

        // A different path under the same directory is denied
        let err = authorizer
            .enforce_download_file(&reader, "/secure/other.txt")
            .unwrap_err();
        assert!(matches!(
            err,
            AuthzError::Inhibited {
                action: Action::Read,
                ..
            }
        ));

        // Read permission does not allow uploads or deletes
        assert!(authorizer
            .enforce_upload_file(&reader, "/secure/doc.txt")
            .is_err());
        assert!(authorizer
            .enforce_delete_file(&reader, "/secure/doc.txt")
            .is_err());
    }
}
