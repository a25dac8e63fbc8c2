use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[cfg(test)]
mod tests;

/// The provider dialect a reference is interpreted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// Not determined. Only meaningful in permalink requests.
    #[default]
    Unknown,
    /// Any host that is not recognised as a known provider.
    Generic,
    /// GitHub, public or Enterprise.
    #[serde(rename = "github")]
    GitHub,
    /// GitLab, public or self-managed.
    #[serde(rename = "gitlab")]
    GitLab,
    /// Bitbucket Server / Data Center (API v1, on-prem).
    #[serde(rename = "bitbucket")]
    BitbucketServer,
}

/// Hostname fragments and the provider they identify, checked in order.
const HOST_FRAGMENTS: &[(&str, ProviderKind)] = &[
    ("github", ProviderKind::GitHub),
    ("gitlab", ProviderKind::GitLab),
    ("bitbucket", ProviderKind::BitbucketServer),
];

impl ProviderKind {
    /// Parse an optional provider hint.
    ///
    /// Blank hints mean "infer from the hostname" and yield `None`. Anything else
    /// must name a known provider or `generic`, case-insensitively.
    pub fn from_hint(hint: Option<&str>) -> Result<Option<Self>> {
        match hint.map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => name.parse().map(Some),
        }
    }

    /// Infer the provider from a hostname by substring match.
    ///
    /// Unrecognised hosts are [`ProviderKind::Generic`], never an error.
    pub fn infer_from_host(host: &str) -> Self {
        let host = host.to_ascii_lowercase();
        HOST_FRAGMENTS
            .iter()
            .find(|(fragment, _)| host.contains(fragment))
            .map_or(Self::Generic, |&(_, kind)| kind)
    }

    /// Well-known public host, if the provider has one.
    pub const fn default_host(self) -> Option<&'static str> {
        match self {
            Self::GitHub => Some("github.com"),
            Self::GitLab => Some("gitlab.com"),
            Self::BitbucketServer => Some("bitbucket.org"),
            Self::Generic | Self::Unknown => None,
        }
    }

    /// Short identifier. Every kind but [`ProviderKind::Unknown`] parses back with [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Generic => "generic",
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::BitbucketServer => "bitbucket",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.eq_ignore_ascii_case(Self::Generic.as_str()) {
            return Ok(Self::Generic);
        }
        HOST_FRAGMENTS
            .iter()
            .find(|(fragment, _)| name.eq_ignore_ascii_case(fragment))
            .map(|&(_, kind)| kind)
            .ok_or_else(|| Error::UnsupportedProviderName {
                name: name.to_string(),
            })
    }
}
