//! Resolve GitHub, GitLab and Bitbucket Server repository references into one
//! canonical identity, and build provider-correct permalinks back from it.

/// Configuration file for the command-line tool.
pub mod config;
pub mod dialect;
/// Error taxonomy.
pub mod error;
/// Canonical repository identities.
pub mod identity;
/// Canonical clone link templates.
pub mod links;
/// Browsable file links with line anchors.
pub mod permalink;
/// Known VCS providers.
pub mod provider;
/// Reference normalisation, scheme validation and path segmentation.
pub mod reference;

pub use config::Config;
pub use error::{Error, Field, Result};
pub use identity::{resolve, AuthType, RepositoryIdentity};
pub use permalink::PermalinkRequest;
pub use provider::ProviderKind;
