use anyhow::Result;
use clap::Subcommand;
use vcs_identity::{config::Config, ProviderKind};

/// Providers that can carry a permalink host override.
const HOST_PROVIDERS: [ProviderKind; 4] = [
    ProviderKind::GitHub,
    ProviderKind::GitLab,
    ProviderKind::BitbucketServer,
    ProviderKind::Generic,
];

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the configuration and the host each provider's permalinks use
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to disk
    Init,
    /// Set a value (e.g. permalink.hosts.bitbucket bitbucket.example.com); an empty value clears it
    Set { key: String, value: String },
    /// Print a value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
            println!();
            for line in permalink_hosts(&config) {
                println!("{line}");
            }
        }
        ConfigAction::Path => println!("{}", Config::path()?.display()),
        ConfigAction::Init => {
            let path = Config::path()?;
            if path.exists() {
                eprintln!("Overwriting {}", path.display());
            }
            Config::default().save_to(&path)?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set_value(&key, &value)?;
            config.save()?;
            println!("{}", describe_stored(&config, &key)?);
        }
        ConfigAction::Get { key } => {
            let value = Config::load()?.get_value(&key)?;
            if value.is_empty() {
                eprintln!("{key} is not set");
            } else {
                println!("{value}");
            }
        }
    }
    Ok(())
}

/// Report what `key` holds after a `set`, which may differ from what was typed.
fn describe_stored(config: &Config, key: &str) -> Result<String> {
    let stored = config.get_value(key)?;
    Ok(if stored.is_empty() {
        format!("Cleared {key}")
    } else {
        format!("Set {key} = {stored}")
    })
}

/// One `# permalink host` line per provider: the override, the public default, or neither.
fn permalink_hosts(config: &Config) -> Vec<String> {
    HOST_PROVIDERS
        .iter()
        .map(|&provider| {
            let host = match (config.permalink_host(provider), provider.default_host()) {
                (Some(host), _) => host.to_string(),
                (None, Some(default)) => format!("{default} (default)"),
                (None, None) => "none, pass --host".to_string(),
            };
            format!("# {provider} permalinks: {host}")
        })
        .collect()
}
