use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;
use crate::provider::ProviderKind;

impl Config {
    /// `~/.config/vcs-identity/config.toml`
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;
        Ok(home.join(".config").join("vcs-identity").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Host override for `provider`, if one is configured.
    pub fn permalink_host(&self, provider: ProviderKind) -> Option<&str> {
        self.permalink.hosts.get(provider.as_str()).map(String::as_str)
    }

    /// Get a config value by dot-separated key path
    pub fn get_value(&self, key: &str) -> Result<String> {
        match key {
            "resolve.provider" => Ok(self.resolve.provider.clone().unwrap_or_default()),
            "fetch.auth" => Ok(self.fetch.auth.to_string()),
            "fetch.root" => Ok(self.fetch.root.display().to_string()),
            _ => match key.strip_prefix("permalink.hosts.") {
                Some(provider) => {
                    let provider: ProviderKind = provider.parse()?;
                    Ok(self.permalink_host(provider).unwrap_or_default().to_string())
                }
                None => anyhow::bail!("Unknown config key: {key}"),
            },
        }
    }

    /// Set a config value by dot-separated key path
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "resolve.provider" => {
                self.resolve.provider = if value.trim().is_empty() {
                    None
                } else {
                    let provider: ProviderKind = value.parse()?;
                    Some(provider.to_string())
                };
            }
            "fetch.auth" => {
                self.fetch.auth = value.parse()?;
            }
            "fetch.root" => {
                self.fetch.root = PathBuf::from(value);
            }
            _ => match key.strip_prefix("permalink.hosts.") {
                Some(provider) => {
                    let provider: ProviderKind = provider.parse()?;
                    if value.trim().is_empty() {
                        self.permalink.hosts.remove(provider.as_str());
                    } else {
                        self.permalink
                            .hosts
                            .insert(provider.to_string(), value.trim().to_string());
                    }
                }
                None => anyhow::bail!("Unknown config key: {key}"),
            },
        }
        Ok(())
    }
}
