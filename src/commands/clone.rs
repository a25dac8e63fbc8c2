use anyhow::{Context, Result};
use vcs_identity::{config::Config, AuthType, RepositoryIdentity};

/// Print the link and the local path a fetch of `reference` would use.
pub fn cmd_clone(reference: &str, provider: Option<&str>, auth: Option<AuthType>) -> Result<()> {
    let config = Config::load()?;
    let hint = provider.or(config.resolve.provider.as_deref());
    let identity = RepositoryIdentity::resolve(reference, hint)
        .with_context(|| format!("Failed to resolve {reference}"))?;

    let auth = auth.unwrap_or(config.fetch.auth);
    let link = identity
        .clone_link(auth)
        .with_context(|| format!("{reference} does not name a single repository"))?;
    let path = identity
        .local_path(&config.fetch.root)
        .with_context(|| format!("{reference} does not name a single repository"))?;

    eprintln!("Using the {auth} clone link");
    println!("{link}");
    println!("{}", path.display());
    Ok(())
}
