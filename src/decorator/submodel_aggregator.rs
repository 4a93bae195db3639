use std::sync::Arc;

use crate::api::types::Submodel;
use crate::api::{ApiError, SubmodelAggregator};
use crate::authorizer::submodel_aggregator::SubmodelAggregatorAuthorizer;
use crate::subject::{SubjectInfo, SubjectProvider};

/// Wraps a [`SubmodelAggregator`] with authorization checks.
pub struct AuthzSubmodelAggregator {
    inner: Arc<dyn SubmodelAggregator>,
    authorizer: SubmodelAggregatorAuthorizer,
    subjects: Arc<dyn SubjectProvider>,
}

impl AuthzSubmodelAggregator {
    pub fn new(
        inner: Arc<dyn SubmodelAggregator>,
        authorizer: SubmodelAggregatorAuthorizer,
        subjects: Arc<dyn SubjectProvider>,
    ) -> Self {
        Self {
            inner,
            authorizer,
            subjects,
        }
    }

    fn subject(&self) -> Result<SubjectInfo, ApiError> {
        self.subjects.get_subject().map_err(ApiError::Internal)
    }
}

impl SubmodelAggregator for AuthzSubmodelAggregator {
    fn list_submodels(&self) -> Result<Vec<Submodel>, ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_list_submodels(&subject)?;
        self.inner.list_submodels()
    }

    fn get_submodel(&self, submodel_id: &str) -> Result<Submodel, ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_get_submodel(&subject, submodel_id)?;
        self.inner.get_submodel(submodel_id)
    }

    fn create_submodel(&self, submodel: Submodel) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer
            .enforce_create_submodel(&subject, &submodel.id)?;
        self.inner.create_submodel(submodel)
    }

    fn update_submodel(&self, submodel: Submodel) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer
            .enforce_update_submodel(&subject, &submodel.id)?;
        self.inner.update_submodel(submodel)
    }

    fn delete_submodel(&self, submodel_id: &str) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer
            .enforce_delete_submodel(&subject, submodel_id)?;
        self.inner.delete_submodel(submodel_id)
    }
}
