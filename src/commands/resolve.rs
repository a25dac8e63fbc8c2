use anyhow::{Context, Result};
use clap::ValueEnum;
use vcs_identity::{config::Config, RepositoryIdentity};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

pub fn cmd_resolve(reference: &str, provider: Option<&str>, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let hint = provider.or(config.resolve.provider.as_deref());
    let identity = RepositoryIdentity::resolve(reference, hint)
        .with_context(|| format!("Failed to resolve {reference}"))?;

    if identity.has_pull_request() {
        eprintln!("Pull request #{}", identity.pull_request_id);
    } else if !identity.is_repository() {
        eprintln!("Reference names no single repository; clone links are empty");
    }

    print!("{}", render(&identity, format)?);
    Ok(())
}

fn render(identity: &RepositoryIdentity, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Toml => toml::to_string_pretty(identity)?,
        OutputFormat::Json => serde_json::to_string_pretty(identity)? + "\n",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json() {
        let identity =
            RepositoryIdentity::resolve("git@github.com:juice-shop/juice-shop.git", None).unwrap();
        insta::assert_snapshot!(render(&identity, OutputFormat::Json).unwrap(), @r#"
        {
          "provider": "github",
          "host": "github.com",
          "namespace": "juice-shop",
          "repository": "juice-shop",
          "pull_request_id": "",
          "http_link": "https://github.com/juice-shop/juice-shop",
          "ssh_link": "ssh://git@github.com/juice-shop/juice-shop.git",
          "raw": "git@github.com:juice-shop/juice-shop.git"
        }
        "#);
    }

    #[test]
    fn test_render_toml() {
        let identity = RepositoryIdentity::resolve("https://gitlab.com/group/sub/repo", None).unwrap();
        let rendered = render(&identity, OutputFormat::Toml).unwrap();
        let parsed: toml::Table = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed["provider"].as_str(), Some("gitlab"));
        assert_eq!(parsed["namespace"].as_str(), Some("group/sub"));
        assert_eq!(
            parsed["ssh_link"].as_str(),
            Some("ssh://git@gitlab.com/group/sub/repo.git")
        );
    }
}
