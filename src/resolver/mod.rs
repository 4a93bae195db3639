mod granted;
mod rbac;
mod union;

pub mod factory;

pub use granted::GrantedAuthorityResolver;
pub use rbac::RbacResolver;
pub use union::UnionResolver;

use anyhow::Result;

use crate::rules::{Action, TargetInformation};
use crate::subject::SubjectInfo;

/// Trait that defines the access-resolution interface.
///
/// Implementers decide whether a subject may perform an action on a target.
/// The trait is thread-safe and implementations hold no per-request state, so
/// a single resolver can serve concurrent checks.
pub trait AccessResolver: Send + Sync {
    /// Resolves a single access check.
    ///
    /// # Arguments
    /// * `req` - The access request containing action, target and subject info
    ///
    /// # Returns
    /// * `Result<AccessResponse>` - The access decision wrapped in a Result;
    ///   `Err` means the check itself failed (for example role resolution I/O)
    fn check_access(&self, req: &AccessRequest) -> Result<AccessResponse>;
}

/// A single access check to be resolved.
///
/// Built fresh by an authorizer for every intercepted operation and consumed
/// immediately; never persisted.
#[derive(Debug, Clone)]
pub struct AccessRequest {
    /// The action being performed.
    pub action: Action,
    /// The object the action applies to.
    pub target: TargetInformation,
    /// Information about the caller.
    pub subject: SubjectInfo,
}

/// Possible responses from an access check.
#[derive(Debug, Copy, Clone)]
pub enum AccessResponse {
    /// Access is granted
    Ok,
    /// Access is denied
    Unauthorized,
}
