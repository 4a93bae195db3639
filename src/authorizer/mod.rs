pub mod files;
pub mod shell;
pub mod shell_aggregator;
pub mod submodel;
pub mod submodel_aggregator;

use thiserror::Error;

use crate::resolver::{AccessRequest, AccessResolver, AccessResponse, UnionResolver};
use crate::rules::{Action, TargetInformation};
use crate::subject::SubjectInfo;

/// Error raised by the `enforce_*` methods of the per-resource authorizers.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// No role or authority of the caller permits the requested action on the
    /// target. The decorators convert this into the protocol-level
    /// not-authorized failure; it must never be swallowed silently.
    #[error("access inhibited: {action} on {target}")]
    Inhibited {
        action: Action,
        target: TargetInformation,
    },

    /// The check itself failed, typically during role or authority resolution.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Runs a single access check against the resolver, translating a denial into
/// [`AuthzError::Inhibited`] carrying the denied action and target.
pub(crate) fn enforce(
    resolver: &UnionResolver,
    subject: &SubjectInfo,
    action: Action,
    target: TargetInformation,
) -> Result<(), AuthzError> {
    let req = AccessRequest {
        action,
        target,
        subject: subject.clone(),
    };
    match resolver.check_access(&req)? {
        AccessResponse::Ok => Ok(()),
        AccessResponse::Unauthorized => Err(AuthzError::Inhibited {
            action,
            target: req.target,
        }),
    }
}
