use std::sync::Arc;

use crate::resolver::UnionResolver;
use crate::rules::{Action, TargetInformation};
use crate::subject::SubjectInfo;

use super::{enforce, AuthzError};

/// Authorization checks for the Shell Aggregator (the shell collection).
///
/// Listing is checked against a shell target with no id, so only rules that
/// omit or wildcard the id permit it.
pub struct ShellAggregatorAuthorizer {
    resolver: Arc<UnionResolver>,
}

impl ShellAggregatorAuthorizer {
    pub fn new(resolver: Arc<UnionResolver>) -> Self {
        Self { resolver }
    }

    pub fn enforce_list_shells(&self, subject: &SubjectInfo) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Read,
            TargetInformation::any_shell(),
        )
    }

    pub fn enforce_get_shell(&self, subject: &SubjectInfo, aas_id: &str) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Read,
            TargetInformation::shell(aas_id),
        )
    }

    pub fn enforce_create_shell(
        &self,
        subject: &SubjectInfo,
        aas_id: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Create,
            TargetInformation::shell(aas_id),
        )
    }

    pub fn enforce_update_shell(
        &self,
        subject: &SubjectInfo,
        aas_id: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Update,
            TargetInformation::shell(aas_id),
        )
    }

    pub fn enforce_delete_shell(
        &self,
        subject: &SubjectInfo,
        aas_id: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Delete,
            TargetInformation::shell(aas_id),
        )
    }
}
