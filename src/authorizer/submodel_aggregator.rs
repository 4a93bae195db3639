use std::sync::Arc;

use crate::resolver::UnionResolver;
use crate::rules::{Action, TargetInformation};
use crate::subject::SubjectInfo;

use super::{enforce, AuthzError};

/// Authorization checks for the Submodel Aggregator (the submodel
/// collection).
pub struct SubmodelAggregatorAuthorizer {
    resolver: Arc<UnionResolver>,
}

impl SubmodelAggregatorAuthorizer {
    pub fn new(resolver: Arc<UnionResolver>) -> Self {
        Self { resolver }
    }

    pub fn enforce_list_submodels(&self, subject: &SubjectInfo) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Read,
            TargetInformation::any_submodel(),
        )
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

    pub fn enforce_create_submodel(
        &self,
        subject: &SubjectInfo,
        submodel_id: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Create,
            TargetInformation::submodel(submodel_id),
        )
    }

    pub fn enforce_update_submodel(
        &self,
        subject: &SubjectInfo,
        submodel_id: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Update,
            TargetInformation::submodel(submodel_id),
        )
    }

    pub fn enforce_delete_submodel(
        &self,
        subject: &SubjectInfo,
        submodel_id: &str,
    ) -> Result<(), AuthzError> {
        enforce(
            &self.resolver,
            subject,
            Action::Delete,
            TargetInformation::submodel(submodel_id),
        )
    }
}
