use std::collections::HashSet;

use anyhow::Result;

/// Identity information for the caller of a protected operation.
///
/// Produced by the authentication layer (for example from a validated token);
/// the authorization core only reads it. Which fields are populated depends on
/// the deployment: role-based setups fill `roles`, granted-authority setups
/// fill `authorities`.
#[derive(Debug, Clone, Default)]
pub struct SubjectInfo {
    /// Subject identifier, used for logging only.
    pub name: String,

    /// Roles resolved for this subject.
    pub roles: HashSet<String>,

    /// Granted authorities resolved for this subject.
    pub authorities: HashSet<String>,
}

impl SubjectInfo {
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.roles = roles.into_iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_authorities<I, S>(mut self, authorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.authorities = authorities.into_iter().map(|a| a.to_string()).collect();
        self
    }
}

/// Provides the subject information for the current call.
///
/// The decorators resolve the subject through this trait on every call, so an
/// implementation typically reads a request-scoped security context. It may
/// perform I/O (for example token validation); failures abort the call before
/// any access check is made.
pub trait SubjectProvider: Send + Sync {
    fn get_subject(&self) -> Result<SubjectInfo>;
}

/// A provider that always returns the same subject.
///
/// Useful for fixed-identity deployments and tests.
pub struct StaticSubjectProvider {
    subject: SubjectInfo,
}

impl StaticSubjectProvider {
    pub fn new(subject: SubjectInfo) -> Self {
        Self { subject }
    }
}

impl SubjectProvider for StaticSubjectProvider {
    fn get_subject(&self) -> Result<SubjectInfo> {
        Ok(self.subject.clone())
    }
}

/// Resolves the set of roles held by a subject.
pub trait RoleAuthenticator: Send + Sync {
    fn get_roles(&self, subject: &SubjectInfo) -> Result<HashSet<String>>;
}

/// Default role authenticator: the roles already resolved by the
/// authentication layer.
pub struct SubjectRoleAuthenticator;

impl RoleAuthenticator for SubjectRoleAuthenticator {
    fn get_roles(&self, subject: &SubjectInfo) -> Result<HashSet<String>> {
        Ok(subject.roles.clone())
    }
}

/// Resolves the granted authorities held by a subject.
pub trait AuthorityAuthenticator: Send + Sync {
    fn get_authorities(&self, subject: &SubjectInfo) -> Result<HashSet<String>>;
}

/// Default authority authenticator: the authorities already resolved by the
/// authentication layer.
pub struct SubjectAuthorityAuthenticator;

impl AuthorityAuthenticator for SubjectAuthorityAuthenticator {
    fn get_authorities(&self, subject: &SubjectInfo) -> Result<HashSet<String>> {
        Ok(subject.authorities.clone())
    }
}
