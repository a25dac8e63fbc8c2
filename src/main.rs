//! `vcs-identity`: resolve repository references and build permalinks from the command line.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vcs_identity::AuthType;

use commands::clone::cmd_clone;
use commands::config::{cmd_config, ConfigAction};
use commands::permalink::{cmd_permalink, PermalinkArgs};
use commands::resolve::{cmd_resolve, OutputFormat};

#[derive(Parser)]
#[command(
    name = "vcs-identity",
    about = "Resolve GitHub, GitLab and Bitbucket Server references into canonical identities"
)]
struct Cli {
    /// Log resolver decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a URL or SCP-like clone string into its canonical identity
    Resolve {
        /// Repository reference, e.g. git@github.com:owner/repo.git
        #[arg(value_name = "REF")]
        reference: String,

        /// Provider dialect to use instead of inferring it from the host
        #[arg(long)]
        provider: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Build a browsable link to a file at a ref
    Permalink {
        /// Provider dialect (github, gitlab, bitbucket)
        #[arg(long)]
        provider: Option<String>,

        /// Host, required when the provider has no public default
        #[arg(long)]
        host: Option<String>,

        /// Owning group, organisation or project
        #[arg(long)]
        namespace: String,

        /// Repository name
        #[arg(long)]
        project: String,

        /// Branch, tag or commit
        #[arg(long = "ref", value_name = "REF")]
        git_ref: String,

        /// Repository-relative file path
        #[arg(long)]
        file: String,

        /// First line of the anchor
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start: i64,

        /// Last line of the anchor
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        end: i64,
    },

    /// Print the clone link and local path a fetch of REF would use
    Clone {
        /// Repository reference
        #[arg(value_name = "REF")]
        reference: String,

        /// Provider dialect to use instead of inferring it from the host
        #[arg(long)]
        provider: Option<String>,

        /// Clone over http or ssh (defaults to fetch.auth)
        #[arg(long)]
        auth: Option<AuthType>,
    },

    /// Manage vcs-identity configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Resolve {
            reference,
            provider,
            format,
        } => cmd_resolve(&reference, provider.as_deref(), format)?,

        Commands::Permalink {
            provider,
            host,
            namespace,
            project,
            git_ref,
            file,
            start,
            end,
        } => cmd_permalink(PermalinkArgs {
            provider,
            host,
            namespace,
            project,
            git_ref,
            file,
            start,
            end,
        })?,

        Commands::Clone {
            reference,
            provider,
            auth,
        } => cmd_clone(&reference, provider.as_deref(), auth)?,

        Commands::Config { action } => cmd_config(action)?,
    }

    Ok(())
}
