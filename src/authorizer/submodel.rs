use std::sync::Arc;

use crate::resolver::UnionResolver;
use crate::rules::{Action, TargetInformation};
use crate::subject::SubjectInfo;

use super::{enforce, AuthzError};

/// Authorization checks for the Submodel API (operations on a single
/// submodel and its elements).
///
/// Element operations carry the idShort path in the target, so rules can be
/// scoped to individual elements or wildcard the path to cover the whole
/// submodel. Invoking an operation element requires EXECUTE, not UPDATE.
pub struct SubmodelApiAuthorizer {
    resolver: Arc<UnionResolver>,
}

impl SubmodelApiAuthorizer {
    pub fn new(resolver: Arc<UnionResolver>) -> Self {
        Self { resolver }
    }

    pub fn enforce_get_submodel(
        &self,
        subject: &SubjectInfo,
        submodel_id: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Read,
            TargetInformation::submodel(submodel_id),
        )
    }

    pub fn enforce_get_element(
        &self,
        subject: &SubjectInfo,
        submodel_id: &str,
        id_short_path: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Read,
            TargetInformation::element(submodel_id, id_short_path),
        )
    }

    pub fn enforce_set_element_value(
        &self,
        subject: &SubjectInfo,
        submodel_id: &str,
        id_short_path: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Update,
            TargetInformation::element(submodel_id, id_short_path),
        )
    }

    pub fn enforce_add_element(
        &self,
        subject: &SubjectInfo,
        submodel_id: &str,
        id_short_path: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Create,
            TargetInformation::element(submodel_id, id_short_path),
        )
    }

    pub fn enforce_delete_element(
        &self,
        subject: &SubjectInfo,
        submodel_id: &str,
        id_short_path: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Delete,
            TargetInformation::element(submodel_id, id_short_path),
        )
    }

    pub fn enforce_invoke_operation(
        &self,
        subject: &SubjectInfo,
        submodel_id: &str,
        id_short_path: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Execute,
            TargetInformation::element(submodel_id, id_short_path),
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
    fn test_element_scoping() {
        let rules: Vec<Rule> = serde_json::from_str(
            r#"[
                {"role": "maintainer", "action": "UPDATE",
                 "targetInformation": {"type": "submodel", "submodelId": "sm1", "idShortPath": "temp.setpoint"}},
                {"role": "operator", "action": "EXECUTE",
                 "targetInformation": {"type": "submodel", "submodelId": "sm1", "idShortPath": "*"}}
            ]"#,
        )
        .unwrap();
        let resolver = Arc::new(UnionResolver::Rbac(RbacResolver::new(
            RuleSet::new(rules),
            Box::new(SubjectRoleAuthenticator),
        )));
        let authorizer = SubmodelApiAuthorizer::new(resolver);

        // Update is limited to the single element named by the rule
        let maintainer = SubjectInfo::new("alice").with_roles(["maintainer"]);
        authorizer
            .enforce_set_element_value(&maintainer, "sm1", "temp.setpoint")
            .unwrap();
        let err = authorizer
            .enforce_set_element_value(&maintainer, "sm1", "temp.limit")
            .unwrap_err();
        assert!(matches!(err, AuthzError::Inhibited { .. }));

        // Execute is wildcarded across the submodel but not across submodels
        let operator = SubjectInfo::new("bob").with_roles(["operator"]);
        authorizer
            .enforce_invoke_operation(&operator, "sm1", "pump.start")
            .unwrap();
        assert!(authorizer
            .enforce_invoke_operation(&operator, "sm2", "pump.start")
            .is_err());

        // Execute does not grant read on the same elements
        assert!(authorizer
            .enforce_get_element(&operator, "sm1", "pump.start")
            .is_err());
    }

    #[test]
    fn test_submodel_read_vs_element_read() {
        let rules: Vec<Rule> = serde_json::from_str(
            r#"[{"role": "viewer", "action": "READ",
                 "targetInformation": {"type": "submodel", "submodelId": "sm1"}}]"#,
        )
        .unwrap();
        let resolver = Arc::new(UnionResolver::Rbac(RbacResolver::new(
            RuleSet::new(rules),
            Box::new(SubjectRoleAuthenticator),
        )));
        let authorizer = SubmodelApiAuthorizer::new(resolver);

        // A rule without an element path covers the submodel and its elements
        let viewer = SubjectInfo::new("carol").with_roles(["viewer"]);
        authorizer.enforce_get_submodel(&viewer, "sm1").unwrap();
        authorizer
            .enforce_get_element(&viewer, "sm1", "temp.value")
            .unwrap();
        assert!(authorizer.enforce_get_submodel(&viewer, "sm2").is_err());
    }
}
