use anyhow::{Context, Result};
use vcs_identity::{config::Config, PermalinkRequest, ProviderKind};

pub struct PermalinkArgs {
    pub provider: Option<String>,
    pub host: Option<String>,
    pub namespace: String,
    pub project: String,
    pub git_ref: String,
    pub file: String,
    pub start: i64,
    pub end: i64,
}

pub fn cmd_permalink(args: PermalinkArgs) -> Result<()> {
    let config = Config::load()?;
    let provider =
        ProviderKind::from_hint(args.provider.as_deref())?.unwrap_or(ProviderKind::Unknown);

    // Command line first, then the configured host; the provider default comes last.
    let host = args
        .host
        .or_else(|| config.permalink_host(provider).map(str::to_string));

    let request = PermalinkRequest {
        provider,
        host,
        namespace: args.namespace,
        project: args.project,
        git_ref: args.git_ref,
        file: args.file,
        start_line: args.start,
        end_line: args.end,
    };
    let link = request
        .build()
        .with_context(|| format!("Failed to build {provider} permalink"))?;
    println!("{link}");
    Ok(())
}
