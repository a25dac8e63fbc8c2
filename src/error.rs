use std::fmt;

use thiserror::Error;

use crate::provider::ProviderKind;

/// Result alias used throughout the resolver.
pub type Result<T> = std::result::Result<T, Error>;

/// A permalink field that must be present before a link can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The owning group, organisation or Bitbucket project.
    Namespace,
    /// The repository name.
    Project,
    /// Branch, tag or commit.
    Ref,
    /// Repository-relative file path.
    File,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Namespace => "namespace",
            Self::Project => "project",
            Self::Ref => "ref",
            Self::File => "file",
        })
    }
}

/// Everything that can go wrong while resolving a reference or building a permalink.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not a structurally valid URI.
    #[error("could not parse repository reference {input:?}")]
    UnparsableReference {
        /// The raw reference as given by the caller.
        input: String,
        /// Underlying URI parser failure, when there was one.
        #[source]
        source: Option<url::ParseError>,
    },

    /// The URI scheme is not one of `http`, `https` or `ssh`.
    #[error("unsupported scheme {scheme:?}, expected one of http, https, ssh")]
    InvalidScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// An HTTP(S) Bitbucket path matched none of the known shapes.
    #[error("unsupported Bitbucket Server path {path:?}")]
    UnsupportedBitbucketPath {
        /// The offending URI path.
        path: String,
    },

    /// An explicit provider hint does not name a known provider.
    #[error("unknown VCS provider {name:?}, expected one of github, gitlab, bitbucket, generic")]
    UnsupportedProviderName {
        /// The rejected hint.
        name: String,
    },

    /// A permalink request is missing a required field.
    #[error("permalink request is missing {0}")]
    MissingField(Field),

    /// A permalink request names a provider without a public default host and carries no host.
    #[error("a host is required to build a {provider} permalink")]
    MissingHost {
        /// Provider of the request.
        provider: ProviderKind,
    },
}
