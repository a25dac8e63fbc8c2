use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::dialect;
use crate::error::Result;
use crate::provider::ProviderKind;
use crate::reference;


/// Which canonical link a fetch should clone from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    /// Clone over HTTPS.
    #[default]
    Http,
    /// Clone over SSH.
    Ssh,
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Http => "http",
            Self::Ssh => "ssh",
        })
    }
}

impl FromStr for AuthType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" | "https" => Ok(Self::Http),
            "ssh" => Ok(Self::Ssh),
            other => bail!("Unknown auth type: {other} (expected http or ssh)"),
        }
    }
}

/// The canonical identity of a repository reference.
///
/// Canonical links are set exactly when `repository` is, and a pull request id
/// only ever comes with both a namespace and a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryIdentity {
    /// Dialect the reference was interpreted with.
    pub provider: ProviderKind,
    /// Hostname of the VCS server.
    pub host: String,
    /// Owning group, organisation, user or project; `/`-separated when nested.
    pub namespace: String,
    /// Repository name without `.git`.
    pub repository: String,
    /// Pull request id when the reference addresses one.
    pub pull_request_id: String,
    /// Canonical HTTPS link.
    pub http_link: String,
    /// Canonical SSH clone link.
    pub ssh_link: String,
    /// The reference as supplied.
    pub raw: String,
}

impl RepositoryIdentity {
    /// Resolve a URL or SCP-like clone string into its canonical identity.
    ///
    /// `hint` names the provider explicitly (`github`, `gitlab`, `bitbucket`,
    /// case-insensitive). When blank the provider is inferred from the hostname.
    pub fn resolve(raw: &str, hint: Option<&str>) -> Result<Self> {
        let (provider, parsed) = reference::classify(raw, hint)?;
        let extraction = dialect::for_provider(provider).extract(&parsed)?;
        let links = extraction
            .template
            .build(&parsed.host, &extraction.namespace, &extraction.repository)
            .unwrap_or_default();

        log::debug!(
            "resolved {raw:?} as {provider} {}/{}/{}",
            parsed.host,
            extraction.namespace,
            extraction.repository
        );

        Ok(Self {
            provider,
            host: parsed.host,
            namespace: extraction.namespace,
            repository: extraction.repository,
            pull_request_id: extraction.pull_request_id,
            http_link: links.http,
            ssh_link: links.ssh,
            raw: parsed.raw,
        })
    }

    /// True when the reference names a single repository.
    pub fn is_repository(&self) -> bool {
        !self.repository.is_empty()
    }

    /// True when the reference addresses a pull request.
    pub fn has_pull_request(&self) -> bool {
        !self.pull_request_id.is_empty()
    }

    /// The link to clone from for `auth`, if the identity names a repository.
    pub fn clone_link(&self, auth: AuthType) -> Option<&str> {
        if !self.is_repository() {
            return None;
        }
        Some(match auth {
            AuthType::Http => &self.http_link,
            AuthType::Ssh => &self.ssh_link,
        })
    }

    /// Local clone location: `root/host/<namespace...>/repository`.
    pub fn local_path(&self, root: &Path) -> Option<PathBuf> {
        if !self.is_repository() {
            return None;
        }
        let mut path = root.join(&self.host);
        path.extend(self.namespace.split('/').filter(|s| !s.is_empty()));
        path.push(&self.repository);
        Some(path)
    }
}

/// Shorthand for [`RepositoryIdentity::resolve`].
pub fn resolve(raw: &str, hint: Option<&str>) -> Result<RepositoryIdentity> {
    RepositoryIdentity::resolve(raw, hint)
}
