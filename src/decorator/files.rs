use std::sync::Arc;

use crate::api::{ApiError, FileService};
use crate::authorizer::files::FilesAuthorizer;
use crate::subject::{SubjectInfo, SubjectProvider};

/// Wraps a [`FileService`] with authorization checks.
pub struct AuthzFileService {
    inner: Arc<dyn FileService>,
    authorizer: FilesAuthorizer,
    subjects: Arc<dyn SubjectProvider>,
}

impl AuthzFileService {
    pub fn new(
        inner: Arc<dyn FileService>,
        authorizer: FilesAuthorizer,
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

impl FileService for AuthzFileService {
    fn download_file(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_download_file(&subject, path)?;
        self.inner.download_file(path)
    }

    fn upload_file(&self, path: &str, data: Vec<u8>) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_upload_file(&subject, path)?;
        self.inner.upload_file(path, data)
    }

    fn delete_file(&self, path: &str) -> Result<(), ApiError> {
        let subject = self.subject()?;
        self.authorizer.enforce_delete_file(&subject, path)?;
        self.inner.delete_file(path)
    }
}
