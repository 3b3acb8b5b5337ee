//! itemctl CLI - run and manage the item CRUD service
//!
//! Subcommands:
//! - `serve`: run the HTTP API
//! - `migrate`: create the items table and exit
//! - `config`: inspect configuration
//! - `completions`: generate shell completion scripts

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod tracing_setup;

use config::ItemctlConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "itemctl",
    author,
    version,
    about = "CRUD HTTP service for items backed by SQLite"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.itemctl/config.toml)
    #[arg(long, global = true, env = "ITEMCTL_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the items schema and exit
    Migrate(commands::migrate::MigrateArgs),
    /// Inspect configuration (path, show)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

impl From<Shell> for clap_complete::Shell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(
        clap_complete::Shell::from(args.shell),
        &mut cmd,
        name,
        &mut std::io::stdout(),
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so clap's `env` fallbacks see .env values
    config::load_dotenv();
    let cli = Cli::parse();

    let config = ItemctlConfig::load(cli.config.as_deref())?;

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        default_level: config.log_level().to_string(),
    })
    .context("Failed to initialize tracing")?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &config).await?,
        Commands::Migrate(args) => commands::run_migrate(args, &config).await?,
        Commands::Config(args) => config::run_config(args, &config)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_serve_flags() {
        let cli = Cli::try_parse_from([
            "itemctl",
            "--debug",
            "serve",
            "--bind",
            "0.0.0.0:9001",
            "--database-url",
            "sqlite::memory:",
            "--max-connections",
            "2",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.bind.unwrap().port(), 9001);
                assert_eq!(args.database_url.as_deref(), Some("sqlite::memory:"));
                assert_eq!(args.max_connections, Some(2));
                assert!(!args.cors_permissive);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(Cli::try_parse_from(["itemctl", "serve", "--bind", "not-an-addr"]).is_err());
    }
}
