pub mod types;

use serde_json::Value;
use thiserror::Error;

use crate::rules::{Action, TargetInformation};

use types::{Reference, Shell, Submodel, SubmodelElement};

/// Errors surfaced by the resource APIs and their authorization decorators.
///
/// `NotAuthorized` is deliberately distinct from `NotFound` and from internal
/// errors, so callers and tests can assert on denial specifically. The outer
/// HTTP layer maps the variants to status codes (see [`crate::response`]).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller is not authorized to perform the operation.
    #[error("not authorized: {action} on {target}")]
    NotAuthorized {
        action: Action,
        target: TargetInformation,
    },

    /// The addressed resource does not exist.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The request arguments are invalid.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// An unexpected failure in the implementation or one of its
    /// collaborators.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn is_not_authorized(&self) -> bool {
        matches!(self, ApiError::NotAuthorized { .. })
    }
}

/// Operations on a single Asset Administration Shell.
pub trait ShellApi: Send + Sync {
    /// The identifier of the shell this API is bound to.
    fn shell_id(&self) -> &str;

    fn get_shell(&self) -> Result<Shell, ApiError>;

    fn get_submodel_refs(&self) -> Result<Vec<Reference>, ApiError>;

    fn add_submodel_ref(&self, reference: Reference) -> Result<(), ApiError>;

    fn remove_submodel_ref(&self, submodel_id: &str) -> Result<(), ApiError>;
}

/// Operations on the collection of shells.
pub trait ShellAggregator: Send + Sync {
    fn list_shells(&self) -> Result<Vec<Shell>, ApiError>;

    fn get_shell(&self, aas_id: &str) -> Result<Shell, ApiError>;

    fn create_shell(&self, shell: Shell) -> Result<(), ApiError>;

    fn update_shell(&self, shell: Shell) -> Result<(), ApiError>;

    fn delete_shell(&self, aas_id: &str) -> Result<(), ApiError>;
}

/// Operations on a single submodel and its elements.
pub trait SubmodelApi: Send + Sync {
    /// The identifier of the submodel this API is bound to.
    fn submodel_id(&self) -> &str;

    fn get_submodel(&self) -> Result<Submodel, ApiError>;

    fn get_element(&self, id_short_path: &str) -> Result<SubmodelElement, ApiError>;

    fn set_element_value(&self, id_short_path: &str, value: Value) -> Result<(), ApiError>;

    fn add_element(&self, element: SubmodelElement) -> Result<(), ApiError>;

    fn delete_element(&self, id_short_path: &str) -> Result<(), ApiError>;

    fn invoke_operation(
        &self,
        id_short_path: &str,
        args: Vec<Value>,
    ) -> Result<Value, ApiError>;
}

/// Operations on the collection of submodels.
pub trait SubmodelAggregator: Send + Sync {
    fn list_submodels(&self) -> Result<Vec<Submodel>, ApiError>;

    fn get_submodel(&self, submodel_id: &str) -> Result<Submodel, ApiError>;

    fn create_submodel(&self, submodel: Submodel) -> Result<(), ApiError>;

    fn update_submodel(&self, submodel: Submodel) -> Result<(), ApiError>;

    fn delete_submodel(&self, submodel_id: &str) -> Result<(), ApiError>;
}

/// File storage attached to the server (supplemental files, thumbnails).
pub trait FileService: Send + Sync {
    fn download_file(&self, path: &str) -> Result<Vec<u8>, ApiError>;

    fn upload_file(&self, path: &str, data: Vec<u8>) -> Result<(), ApiError>;

    fn delete_file(&self, path: &str) -> Result<(), ApiError>;
}
