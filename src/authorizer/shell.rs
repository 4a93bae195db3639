use std::sync::Arc;

use crate::resolver::UnionResolver;
use crate::rules::{Action, TargetInformation};
use crate::subject::SubjectInfo;

use super::{enforce, AuthzError};

/// Authorization checks for the Shell API (operations on a single shell).
///
/// Each method mirrors one operation of [`crate::api::ShellApi`]: it builds
/// the action/target pair from the operation's arguments and returns `Ok(())`
/// on permit or [`AuthzError::Inhibited`] on deny.
pub struct ShellApiAuthorizer {
    resolver: Arc<UnionResolver>,
}

impl ShellApiAuthorizer {
    pub fn new(resolver: Arc<UnionResolver>) -> Self {
        Self { resolver }
    }

    pub fn enforce_get_shell(&self, subject: &SubjectInfo, aas_id: &str) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Read,
            TargetInformation::shell(aas_id),
        )
    }

    pub fn enforce_get_submodel_refs(
        &self,
        subject: &SubjectInfo,
        aas_id: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Read,
            TargetInformation::shell(aas_id),
        )
    }

    pub fn enforce_add_submodel_ref(
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

    pub fn enforce_remove_submodel_ref(
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
}
