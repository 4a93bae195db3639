use std::sync::Arc;

use crate::api::types::{Reference, Shell};
use crate::api::{ApiError, ShellApi};
use crate::authorizer::shell::ShellApiAuthorizer;
use crate::subject::{SubjectInfo, SubjectProvider};

/// Wraps a [`ShellApi`] with authorization checks.
///
/// Implements the same trait as the wrapped API: every call resolves the
/// current subject, runs the matching access check and only then delegates.
/// Denied calls fail with [`ApiError::NotAuthorized`] without reaching the
/// wrapped implementation; permitted calls pass results and errors through
/// unchanged. Stateless per call, decisions are never cached.
pub struct AuthzShellApi {
    inner: Arc<dyn ShellApi>,
    authorizer: ShellApiAuthorizer,
    subjects: Arc<dyn SubjectProvider>,
}

impl AuthzShellApi {
    pub fn new(
        inner: Arc<dyn ShellApi>,
        authorizer: ShellApiAuthorizer,
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

impl ShellApi for AuthzShellApi {
    fn shell_id(&self) -> &str {
        self.inner.shell_id()
    }

    fn get_shell(&self) -> Result<Shell, ApiError> {
        let subject = self.subject()?;
        self.authorizer
            .enforce_get_shell(&subject, self.inner.shell_id())?;
        self.inner.get_shell()
    }

    fn get_submodel_refs(&self) -> Result<Vec<Reference>, ApiError> {
        let subject = self.subject()?;
        self.authorizer
            .enforce_get_submodel_refs(&subject, self.inner.shell_id())?;
        self.inner.get_submodel_refs()
    }

    fn add_submodel_ref(&self, reference: Reference) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer
            .enforce_add_submodel_ref(&subject, self.inner.shell_id())?;
        self.inner.add_submodel_ref(reference)
    }

    fn remove_submodel_ref(&self, submodel_id: &str) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer
            .enforce_remove_submodel_ref(&subject, self.inner.shell_id())?;
        self.inner.remove_submodel_ref(submodel_id)
    }
}
