mod ops;


use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::identity::AuthType;

/// Contents of `~/.config/vcs-identity/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults for reference resolution.
    pub resolve: ResolveConfig,
    /// Clone link and location preferences.
    pub fetch: FetchConfig,
    /// Permalink host overrides.
    pub permalink: PermalinkConfig,
}

/// `[resolve]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Provider hint used when the command line gives none, e.g. "bitbucket"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// `[fetch]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Which canonical link to clone from.
    pub auth: AuthType,
    /// Directory clones are laid out under.
    pub root: PathBuf,
}

/// `[permalink]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermalinkConfig {
    /// Provider name to host, e.g. `bitbucket = "bitbucket.example.com"`
    pub hosts: BTreeMap<String, String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            auth: AuthType::Http,
            root: dirs::home_dir()
                .unwrap_or_default()
                .join("vcs-identity"),
        }
    }
}
