use std::sync::Arc;

use serde_json::Value;

use crate::api::types::{Submodel, SubmodelElement};
use crate::api::{ApiError, SubmodelApi};
use crate::authorizer::submodel::SubmodelApiAuthorizer;
use crate::subject::{SubjectInfo, SubjectProvider};

/// Wraps a [`SubmodelApi`] with authorization checks.
pub struct AuthzSubmodelApi {
    inner: Arc<dyn SubmodelApi>,
    authorizer: SubmodelApiAuthorizer,
    subjects: Arc<dyn SubjectProvider>,
}

impl AuthzSubmodelApi {
    pub fn new(
        inner: Arc<dyn SubmodelApi>,
        authorizer: SubmodelApiAuthorizer,
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

impl SubmodelApi for AuthzSubmodelApi {
    fn submodel_id(&self) -> &str {
        self.inner.submodel_id()
    }

    fn get_submodel(&self) -> Result<Submodel, ApiError> {
        let subject = self.subject()?;
        self.authorizer
            .enforce_get_submodel(&subject, self.inner.submodel_id())?;
        self.inner.get_submodel()
    }

    fn get_element(&self, id_short_path: &str) -> Result<SubmodelElement, ApiError> {
        let subject = self.subject()?;
        self.authorizer
            .enforce_get_element(&subject, self.inner.submodel_id(), id_short_path)?;
        self.inner.get_element(id_short_path)
    }

    fn set_element_value(&self, id_short_path: &str, value: Value) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_set_element_value(
            &subject,
            self.inner.submodel_id(),
            id_short_path,
        )?;
        self.inner.set_element_value(id_short_path, value)
    }

    fn add_element(&self, element: SubmodelElement) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer
            .enforce_add_element(&subject, self.inner.submodel_id(), &element.id_short)?;
        self.inner.add_element(element)
    }

    fn delete_element(&self, id_short_path: &str) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer
            .enforce_delete_element(&subject, self.inner.submodel_id(), id_short_path)?;
        self.inner.delete_element(id_short_path)
    }

    fn invoke_operation(&self, id_short_path: &str, args: Vec<Value>) -> Result<Value, ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_invoke_operation(
            &subject,
            self.inner.submodel_id(),
            id_short_path,
        )?;
        self.inner.invoke_operation(id_short_path, args)
    }
}
