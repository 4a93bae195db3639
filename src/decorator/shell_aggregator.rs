use std::sync::Arc;

use crate::api::types::Shell;
use crate::api::{ApiError, ShellAggregator};
use crate::authorizer::shell_aggregator::ShellAggregatorAuthorizer;
use crate::subject::{SubjectInfo, SubjectProvider};

/// Wraps a [`ShellAggregator`] with authorization checks.
pub struct AuthzShellAggregator {
    inner: Arc<dyn ShellAggregator>,
    authorizer: ShellAggregatorAuthorizer,
    subjects: Arc<dyn SubjectProvider>,
}

impl AuthzShellAggregator {
    pub fn new(
        inner: Arc<dyn ShellAggregator>,
        authorizer: ShellAggregatorAuthorizer,
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

impl ShellAggregator for AuthzShellAggregator {
    fn list_shells(&self) -> Result<Vec<Shell>, ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_list_shells(&subject)?;
        self.inner.list_shells()
    }

    fn get_shell(&self, aas_id: &str) -> Result<Shell, ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_get_shell(&subject, aas_id)?;
        self.inner.get_shell(aas_id)
    }

    fn create_shell(&self, shell: Shell) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_create_shell(&subject, &shell.id)?;
        self.inner.create_shell(shell)
    }

    fn update_shell(&self, shell: Shell) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_update_shell(&subject, &shell.id)?;
        self.inner.update_shell(shell)
    }

    fn delete_shell(&self, aas_id: &str) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_delete_shell(&subject, aas_id)?;
        self.inner.delete_shell(aas_id)
    }
}
