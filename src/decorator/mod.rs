mod files;
mod shell;
mod shell_aggregator;
mod submodel;
mod submodel_aggregator;

pub mod factory;

pub use files::AuthzFileService;
pub use shell::AuthzShellApi;
pub use shell_aggregator::AuthzShellAggregator;
pub use submodel::AuthzSubmodelApi;
pub use submodel_aggregator::AuthzSubmodelAggregator;

use crate::api::ApiError;
use crate::authorizer::AuthzError;

// The single point where an inhibited check becomes the protocol-level
// not-authorized failure. Internal check failures stay internal errors so they
// cannot be mistaken for a denial.
impl From<AuthzError> for ApiError {
    fn from(err: AuthzError) -> Self {
        match err {
            AuthzError::Inhibited { action, target } => ApiError::NotAuthorized { action, target },
            AuthzError::Internal(err) => ApiError::Internal(err),
        }
    }
}
