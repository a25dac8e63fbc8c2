//! Per-provider path grammars.
//!
//! Each dialect turns the segments of a [`ParsedReference`] into the owning
//! namespace, the repository and (where the grammar has one) a pull request,
//! together with the [`LinkTemplate`] its canonical links are spelled with.

mod bitbucket;
mod generic;

use crate::error::Result;
use crate::links::LinkTemplate;
use crate::provider::ProviderKind;
use crate::reference::ParsedReference;

pub use bitbucket::BitbucketServer;
pub use generic::Generic;

/// What a dialect extracted from a reference path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Owning namespace, possibly nested (`group/sub`). Empty for whole-host references.
    pub namespace: String,
    /// Repository name. Empty for host or namespace references.
    pub repository: String,
    /// Pull request id. Empty unless the path addresses a pull request.
    pub pull_request_id: String,
    /// Template the canonical links are rendered with.
    pub template: LinkTemplate,
}

impl Extraction {
    pub(crate) fn new(template: LinkTemplate) -> Self {
        Self {
            namespace: String::new(),
            repository: String::new(),
            pull_request_id: String::new(),
            template,
        }
    }

    pub(crate) fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub(crate) fn repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    pub(crate) fn pull_request(mut self, id: impl Into<String>) -> Self {
        self.pull_request_id = id.into();
        self
    }
}

/// A provider's path grammar.
pub trait Dialect {
    /// Extract namespace, repository and pull request from `reference`.
    fn extract(&self, reference: &ParsedReference) -> Result<Extraction>;
}

/// The dialect that interprets references for `provider`.
pub fn for_provider(provider: ProviderKind) -> &'static dyn Dialect {
    match provider {
        ProviderKind::BitbucketServer => &BitbucketServer,
        ProviderKind::GitHub
        | ProviderKind::GitLab
        | ProviderKind::Generic
        | ProviderKind::Unknown => &Generic,
    }
}
