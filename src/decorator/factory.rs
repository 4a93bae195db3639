use std::sync::Arc;

use anyhow::Result;

use crate::api::{FileService, ShellAggregator, ShellApi, SubmodelAggregator, SubmodelApi};
use crate::authorizer::files::FilesAuthorizer;
use crate::authorizer::shell::ShellApiAuthorizer;
use crate::authorizer::shell_aggregator::ShellAggregatorAuthorizer;
use crate::authorizer::submodel::SubmodelApiAuthorizer;
use crate::authorizer::submodel_aggregator::SubmodelAggregatorAuthorizer;
use crate::config::AuthzConfig;
use crate::resolver::factory::AuthzFactory;
use crate::resolver::UnionResolver;
use crate::subject::SubjectProvider;

use super::{
    AuthzFileService, AuthzShellAggregator, AuthzShellApi, AuthzSubmodelAggregator,
    AuthzSubmodelApi,
};

/// Builds authorizing decorators around resource implementations.
///
/// Construction fails on any configuration problem, so a misconfigured
/// deployment never starts with weaker checks than intended. When
/// authorization is disabled, the `decorate_*` methods return the wrapped
/// implementation unchanged.
pub struct DecoratorFactory {
    resolver: Option<Arc<UnionResolver>>,
    subjects: Arc<dyn SubjectProvider>,
}

impl DecoratorFactory {
    pub fn new(
        cfg: &AuthzConfig,
        factory: AuthzFactory,
        subjects: Arc<dyn SubjectProvider>,
    ) -> Result<Self> {
        let resolver = factory.build_resolver(cfg)?.map(Arc::new);
        Ok(Self { resolver, subjects })
    }

    pub fn decorate_shell_api(&self, inner: Arc<dyn ShellApi>) -> Arc<dyn ShellApi> {
        match self.resolver {
            Some(ref resolver) => Arc::new(AuthzShellApi::new(
                inner,
                ShellApiAuthorizer::new(resolver.clone()),
                self.subjects.clone(),
            )),
            None => inner,
        }
    }

    pub fn decorate_shell_aggregator(
        &self,
        inner: Arc<dyn ShellAggregator>,
    ) -> Arc<dyn ShellAggregator> {
        match self.resolver {
            Some(ref resolver) => Arc::new(AuthzShellAggregator::new(
                inner,
                ShellAggregatorAuthorizer::new(resolver.clone()),
                self.subjects.clone(),
            )),
            None => inner,
        }
    }

    pub fn decorate_submodel_api(&self, inner: Arc<dyn SubmodelApi>) -> Arc<dyn SubmodelApi> {
        match self.resolver {
            Some(ref resolver) => Arc::new(AuthzSubmodelApi::new(
                inner,
                SubmodelApiAuthorizer::new(resolver.clone()),
                self.subjects.clone(),
            )),
            None => inner,
        }
    }

    pub fn decorate_submodel_aggregator(
        &self,
        inner: Arc<dyn SubmodelAggregator>,
    ) -> Arc<dyn SubmodelAggregator> {
        match self.resolver {
            Some(ref resolver) => Arc::new(AuthzSubmodelAggregator::new(
                inner,
                SubmodelAggregatorAuthorizer::new(resolver.clone()),
                self.subjects.clone(),
            )),
            None => inner,
        }
    }

    pub fn decorate_file_service(&self, inner: Arc<dyn FileService>) -> Arc<dyn FileService> {
        match self.resolver {
            Some(ref resolver) => Arc::new(AuthzFileService::new(
                inner,
                FilesAuthorizer::new(resolver.clone()),
                self.subjects.clone(),
            )),
            None => inner,
        }
    }
}
